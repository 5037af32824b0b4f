//! Error types for the calgrid core.

use thiserror::Error;

use crate::CalendarDate;

/// Errors that can occur when validating outbound payloads.
///
/// Malformed *inbound* data (unparseable datetimes on fetched events) is
/// never an error: the bucketer degrades and logs instead. These variants
/// cover user input that must be rejected before it reaches the backend.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalGridError {
    #[error("Title cannot be blank")]
    BlankTitle,

    #[error("Invalid start date/time: '{0}' (expected YYYY-MM-DDTHH:MM)")]
    InvalidStart(String),

    #[error("Invalid end date/time: '{0}' (expected YYYY-MM-DDTHH:MM)")]
    InvalidEnd(String),

    #[error("End cannot be before start")]
    EndBeforeStart,

    #[error("Cannot create events on past dates ({0})")]
    DateInPast(CalendarDate),

    #[error("Category name cannot be blank")]
    BlankCategoryName,

    #[error("Invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),
}

/// Result type alias for calgrid core operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
