//! Event and category wire types.
//!
//! These mirror the backend DTOs (camelCase JSON) exactly: `EventRecord`
//! is what `GET /api/events` returns, `EventDraft` is what create/update
//! intents send, `Category` matches the category DTO. The bucketer only
//! ever borrows `EventRecord`s; the collection itself is owned by the
//! fetch-orchestration layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::datetime::{local_date_of, parse_local};

/// A persisted calendar event as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Backend-assigned, unique.
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 local wall-clock literal. May be malformed on bad data;
    /// such records are skipped during bucketing, never fatal.
    pub start_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
}

impl EventRecord {
    /// Parsed start instant, `None` when the literal is malformed.
    pub fn start_local(&self) -> Option<NaiveDateTime> {
        parse_local(&self.start_date_time)
    }

    /// Parsed end instant. Absent and unparseable ends are both `None`.
    pub fn end_local(&self) -> Option<NaiveDateTime> {
        self.end_date_time.as_deref().and_then(parse_local)
    }

    /// Calendar day of the start literal.
    pub fn start_day(&self) -> Option<CalendarDate> {
        local_date_of(&self.start_date_time)
    }

    /// Whether the event spans more than one calendar day.
    /// An absent, unparseable or inverted end never makes an event multi-day.
    pub fn is_multi_day(&self) -> bool {
        match (self.start_day(), self.end_local().map(|dt| dt.date())) {
            (Some(start), Some(end)) => end > start,
            _ => false,
        }
    }
}

/// Outbound payload for create/update intents.
///
/// Same DTO shape as `EventRecord` minus the backend-assigned fields;
/// the backend resolves `category_id` into the denormalized name/color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// An event category (user-scoped label + color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
