//! HTTP client for the external dashboard REST API.
//!
//! The dashboard backend persists machines (and the rest of the facility
//! registry) as JSON resources addressed by collection name and id, with a
//! bracketed filter/order query language on list endpoints. This crate is the
//! consumer side of that contract:
//! - `api` — `ApiClient` and generic per-resource CRUD handles
//! - `query` — the `filter[field][op]` / `sort` / `limit` builder
//! - `error` — typed client errors
//!
//! No retry or caching policy lives here; callers own that.

pub mod api;
pub mod error;
pub mod query;

pub use api::{ApiClient, Resource};
pub use error::{ClientError, Result};
pub use query::{FilterOp, ListQuery};
