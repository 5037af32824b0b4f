//! Local wall-clock datetime handling.
//!
//! The backend stores and serves `LocalDateTime` values as ISO-8601
//! literals with no reliable offset discipline, so the whole core reads
//! them one way: take the `YYYY-MM-DDTHH:MM[:SS[.f]]` prefix as written
//! and ignore any trailing `Z` or offset. The date a user typed is the
//! date they see, with no engine-dependent timezone conversion.

use chrono::{NaiveDateTime, Timelike};

use crate::CalendarDate;

/// Parse an ISO-8601 literal as a local wall-clock datetime.
///
/// Accepts second and sub-second precision, bare `YYYY-MM-DDTHH:MM`, and
/// a plain `YYYY-MM-DD` (taken as midnight). Returns `None` on anything
/// else — callers decide whether that is a skip or a validation error.
pub fn parse_local(s: &str) -> Option<NaiveDateTime> {
    let literal = strip_offset(s.trim());

    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(literal, format) {
            return Some(dt);
        }
    }

    // Date-only literals map to local midnight
    CalendarDate::parse_from_str(literal, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Reduce a literal to its calendar day.
pub fn local_date_of(s: &str) -> Option<CalendarDate> {
    parse_local(s).map(|dt| dt.date())
}

/// Drop a trailing `Z` or `±HH:MM` offset so only the wall-clock part remains.
fn strip_offset(s: &str) -> &str {
    if let Some(stripped) = s.strip_suffix('Z') {
        return stripped;
    }
    // An offset sign can only follow the time part, i.e. after the 'T'
    if let Some(t_pos) = s.find('T') {
        if let Some(sign_pos) = s[t_pos..].rfind(['+', '-']) {
            return &s[..t_pos + sign_pos];
        }
    }
    s
}

/// Whether `date` is strictly before `today`. Today itself is not past.
pub fn is_past_date(date: CalendarDate, today: CalendarDate) -> bool {
    date < today
}

/// Format the time-of-day of a literal as `HH:MM` for display.
/// Unparseable literals render as an empty string rather than failing.
pub fn format_time(s: &str) -> String {
    match parse_local(s) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => String::new(),
    }
}
