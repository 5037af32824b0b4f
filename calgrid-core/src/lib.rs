//! Pure calendar core for calgrid.
//!
//! This crate holds everything that can be computed without I/O:
//! - `grid` builds the 42-cell month view grid
//! - `bucket` assigns events to the calendar days they touch
//! - `event` mirrors the backend's event/category wire types
//! - `datetime` parses the backend's local wall-clock literals
//! - `validate` checks outbound event/category payloads
//!
//! The surrounding CLI owns all networking, caching and rendering.

pub mod bucket;
pub mod color;
pub mod datetime;
pub mod error;
pub mod event;
pub mod grid;
pub mod validate;

/// A calendar day with no time-of-day component — the unit of bucketing.
pub type CalendarDate = chrono::NaiveDate;

pub use bucket::bucket_events;
pub use error::{CalGridError, CalGridResult};
pub use event::{Category, EventDraft, EventRecord};
pub use grid::{GridCell, GridSpan, build_month_grid, month_range};
