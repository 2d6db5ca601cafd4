//! Machine registry wire model.
//!
//! Machines are persisted by the external dashboard API as JSON documents and
//! only consumed here. Recurring maintenance tasks are embedded in the machine
//! document. Date fields stay ISO-8601 strings on the wire and are parsed
//! where they are used, so a malformed value is reported against the owning
//! task instead of failing the whole document decode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A machine in the facility registry, with its embedded maintenance tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: String,
    pub name: String,
    /// Free-form room/area label from the dashboard's room registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Operational status as reported by the registry; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Recurring maintenance tasks. Absent on the wire means none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<MaintenanceTask>,
}

/// A recurring maintenance task attached to a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    /// Unique within the owning machine's task list.
    pub id: String,
    pub title: String,
    /// ISO-8601 date-time; anchor of the series.
    pub start_date: String,
    pub recurrence: Recurrence,
    /// Step count in units of the recurrence kind. Must be >= 1.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday. Weekly rules only; when
    /// present the rule fires on matching weekdays instead of a fixed weekly
    /// cadence from the anchor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    /// 1..=31, clamped to the target month's length at generation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    /// 1 = January .. 12 = December. Yearly rules only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Optional ISO-8601 date-time; inclusive upper bound of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

fn default_interval() -> u32 {
    1
}

/// How a maintenance task repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Daily => write!(f, "daily"),
            Recurrence::Weekly => write!(f, "weekly"),
            Recurrence::Monthly => write!(f, "monthly"),
            Recurrence::Yearly => write!(f, "yearly"),
        }
    }
}
