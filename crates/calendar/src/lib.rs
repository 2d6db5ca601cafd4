//! Recurring maintenance task occurrence engine.
//!
//! Expands the recurrence rules embedded in machine documents into concrete
//! calendar dates for a queried window:
//! - `window` — closed date ranges and wire-date parsing
//! - `expand` — the forward-walk occurrence generator
//! - `aggregate` — machine/task fan-out with denormalized projection
//! - `validation` — structured rule validation for editing surfaces
//!
//! Expansion is pure and bounded: no I/O, ascending output, and a hard
//! iteration cap that turns a degenerate rule into a truncated result
//! instead of a hang.

pub mod aggregate;
pub mod error;
pub mod expand;
pub mod occurrence;
pub mod validation;
pub mod window;


pub use aggregate::{occurrences_for_machine, occurrences_for_machines};
pub use error::{CalendarError, Result};
pub use expand::{expand_dates, MAX_ITERATIONS};
pub use occurrence::{occurrence_id, TaskOccurrence};
pub use window::DateWindow;
