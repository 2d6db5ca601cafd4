//! Closed date ranges for occurrence queries, plus wire-date parsing.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::error::{CalendarError, Result};

/// Closed `[start, end]` calendar-date range.
///
/// Both ends are inclusive. Typically derived from a calendar UI's visible
/// period and widened with [`padded`](DateWindow::padded) so scrolling does
/// not immediately require a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window. Fails if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(CalendarError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The window covering one whole calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidMonth { year, month })?;
        let end = NaiveDate::from_ymd_opt(year, month, last_day_of_month(year, month))
            .ok_or(CalendarError::InvalidMonth { year, month })?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Widen both ends by `days`.
    pub fn padded(&self, days: u32) -> Self {
        Self {
            start: self.start - Duration::days(i64::from(days)),
            end: self.end + Duration::days(i64::from(days)),
        }
    }

    /// Whether `date` falls inside the window (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Last day (28..=31) of the given month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Parse an ISO-8601 date-time (or bare date) string to its calendar date.
///
/// Accepts RFC 3339 with offset ("2024-01-15T08:00:00Z"), a naive date-time
/// without offset, or a bare date. Time-of-day and offset are accepted and
/// discarded; only the named calendar date matters. Returns `None` for
/// anything else.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
