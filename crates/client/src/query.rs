//! Filter/order query language for list endpoints.
//!
//! The dashboard API filters with bracketed params — `filter[field][_eq]=v` —
//! plus `sort` (leading `-` for descending), `limit`, and `offset`. Values
//! are passed as query pairs and percent-encoded by the HTTP layer.

/// Comparison operators supported by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Neq,
    Contains,
}

impl FilterOp {
    fn as_param(self) -> &'static str {
        match self {
            FilterOp::Eq => "_eq",
            FilterOp::Neq => "_neq",
            FilterOp::Contains => "_contains",
        }
    }
}

/// Builder for list queries.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    filters: Vec<(String, FilterOp, String)>,
    sort: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter clause; clauses combine with AND.
    pub fn filter(mut self, field: &str, op: FilterOp, value: impl Into<String>) -> Self {
        self.filters.push((field.to_string(), op, value.into()));
        self
    }

    /// Sort ascending by `field`.
    pub fn sort_asc(mut self, field: &str) -> Self {
        self.sort = Some(field.to_string());
        self
    }

    /// Sort descending by `field`.
    pub fn sort_desc(mut self, field: &str) -> Self {
        self.sort = Some(format!("-{}", field));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Render as query pairs for the HTTP layer.
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (field, op, value) in &self.filters {
            pairs.push((format!("filter[{}][{}]", field, op.as_param()), value.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_renders_no_pairs() {
        assert!(ListQuery::new().to_pairs().is_empty());
    }

    #[test]
    fn filters_render_bracketed_params() {
        let pairs = ListQuery::new()
            .filter("location", FilterOp::Eq, "Hall B")
            .filter("name", FilterOp::Contains, "press")
            .to_pairs();

        assert_eq!(
            pairs,
            vec![
                ("filter[location][_eq]".to_string(), "Hall B".to_string()),
                ("filter[name][_contains]".to_string(), "press".to_string()),
            ]
        );
    }

    #[test]
    fn sort_descending_gets_leading_dash() {
        let pairs = ListQuery::new().sort_desc("name").to_pairs();
        assert_eq!(pairs, vec![("sort".to_string(), "-name".to_string())]);
    }

    #[test]
    fn pagination_renders_limit_and_offset() {
        let pairs = ListQuery::new().limit(25).offset(50).to_pairs();
        assert!(pairs.contains(&("limit".to_string(), "25".to_string())));
        assert!(pairs.contains(&("offset".to_string(), "50".to_string())));
    }

    #[test]
    fn later_sort_call_wins() {
        let pairs = ListQuery::new().sort_asc("name").sort_desc("id").to_pairs();
        assert_eq!(pairs, vec![("sort".to_string(), "-id".to_string())]);
    }
}
