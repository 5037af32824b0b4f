//! Fetch orchestration and month-freshness caching.
//!
//! The store owns the in-memory event collection and the knowledge of
//! which visible month it is fresh for. The bucketing core stays a pure
//! function of its inputs; every caching concern lives here. On a
//! transport failure the last-known collection is left untouched and the
//! error propagates so the command layer can report it.

use std::collections::HashMap;

use anyhow::Result;

use calgrid_core::{CalendarDate, EventRecord, month_range};
use chrono::Datelike;

use crate::client::ApiClient;

/// Cache key for one visible month.
type MonthKey = (i32, u32);

fn month_key(reference: CalendarDate) -> MonthKey {
    (reference.year(), reference.month())
}

#[derive(Default)]
pub struct EventStore {
    events: Vec<EventRecord>,
    /// Freshness flag per (year, month): true once that month has been
    /// fetched and no mutation has stale'd it since.
    fresh: HashMap<MonthKey, bool>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// The current collection snapshot. Borrow it for one bucketing pass;
    /// any mutation through the store may replace it.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn is_fresh(&self, reference: CalendarDate) -> bool {
        self.fresh.get(&month_key(reference)).copied().unwrap_or(false)
    }

    /// Fetch the month containing `reference` unless it is already fresh.
    ///
    /// The collection is replaced wholesale on success, so only the
    /// fetched month is marked fresh afterwards.
    pub async fn ensure_month(
        &mut self,
        client: &ApiClient,
        reference: CalendarDate,
    ) -> Result<()> {
        if self.is_fresh(reference) {
            log::debug!("month {}-{:02} already fresh", reference.year(), reference.month());
            return Ok(());
        }

        let (first, last) = month_range(reference);
        // Full-day bounds: the backend filters on start datetime
        let range_start = first.and_hms_opt(0, 0, 0).unwrap();
        let range_end = last.and_hms_opt(23, 59, 59).unwrap();

        let fetched = client.fetch_events(range_start, range_end).await?;
        log::info!(
            "fetched {} events for {}-{:02}",
            fetched.len(),
            reference.year(),
            reference.month()
        );

        self.events = fetched;
        self.fresh.clear();
        self.fresh.insert(month_key(reference), true);
        Ok(())
    }

    /// Record a persisted create without a refetch.
    pub fn apply_created(&mut self, event: EventRecord) {
        self.events.push(event);
    }

    /// Record a persisted update without a refetch.
    pub fn apply_updated(&mut self, event: EventRecord) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    /// Record a persisted delete without a refetch.
    pub fn apply_deleted(&mut self, id: i64) {
        self.events.retain(|e| e.id != id);
    }

    /// Mark one month stale, forcing the next `ensure_month` to refetch.
    pub fn invalidate(&mut self, reference: CalendarDate) {
        self.fresh.remove(&month_key(reference));
    }

    pub fn invalidate_all(&mut self) {
        self.fresh.clear();
    }

    #[cfg(test)]
    fn with_events(events: Vec<EventRecord>, fresh_for: CalendarDate) -> Self {
        let mut store = EventStore {
            events,
            fresh: HashMap::new(),
        };
        store.fresh.insert(month_key(fresh_for), true);
        store
    }
}
