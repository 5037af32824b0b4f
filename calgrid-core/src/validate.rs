//! Validation of outbound payloads.
//!
//! Inbound malformation is the bucketer's concern and degrades silently;
//! these checks reject *user input* before it is sent to the backend,
//! mirroring the form rules of the original client and the DTO's
//! blank-name constraint.

use crate::CalendarDate;
use crate::color::parse_hex;
use crate::datetime::{is_past_date, parse_local};
use crate::error::{CalGridError, CalGridResult};
use crate::event::EventDraft;

/// Validate an event draft before sending a create intent.
///
/// `today` is passed in so the check stays a pure function; events on
/// today itself are allowed, only strictly past days are rejected.
pub fn validate_new_event(draft: &EventDraft, today: CalendarDate) -> CalGridResult<()> {
    validate_event_fields(draft)?;

    // Checked by validate_event_fields above
    let start = parse_local(&draft.start_date_time).unwrap();
    if is_past_date(start.date(), today) {
        return Err(CalGridError::DateInPast(start.date()));
    }

    Ok(())
}

/// Validate an event draft for an update intent.
/// Updates may touch past events, so no past-date rule applies.
pub fn validate_event_fields(draft: &EventDraft) -> CalGridResult<()> {
    if draft.title.trim().is_empty() {
        return Err(CalGridError::BlankTitle);
    }

    let start = parse_local(&draft.start_date_time)
        .ok_or_else(|| CalGridError::InvalidStart(draft.start_date_time.clone()))?;

    if let Some(end_literal) = &draft.end_date_time {
        let end = parse_local(end_literal)
            .ok_or_else(|| CalGridError::InvalidEnd(end_literal.clone()))?;
        if end < start {
            return Err(CalGridError::EndBeforeStart);
        }
    }

    Ok(())
}

/// Validate a category payload: non-blank name, well-formed color if given.
pub fn validate_category(name: &str, color: Option<&str>) -> CalGridResult<()> {
    if name.trim().is_empty() {
        return Err(CalGridError::BlankCategoryName);
    }
    if let Some(color) = color {
        parse_hex(color)?;
    }
    Ok(())
}
