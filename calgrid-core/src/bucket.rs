//! Day-bucketing: which events appear on which grid day, in what order.
//!
//! A pure function of (span, events). The fetch layer owns caching and
//! re-fetch decisions; repeated calls with identical input recompute the
//! identical result.

use std::collections::BTreeMap;

use crate::CalendarDate;
use crate::event::EventRecord;
use crate::grid::GridSpan;

/// Assign each event to every calendar day it touches within `span`.
///
/// Per event:
/// - events whose start literal does not parse are skipped with a warning,
///   never an error;
/// - an absent, unparseable or calendar-inverted end degrades the event to
///   its start day only;
/// - otherwise the event lands on every day of the inclusive
///   [start-day, end-day] range, clamped to the span.
///
/// Every day of the span is present as a key, possibly with an empty
/// bucket. Within a day, events are ordered by start instant ascending,
/// ties broken by id ascending — a total order even when two events share
/// a start instant.
pub fn bucket_events<'a>(
    span: GridSpan,
    events: &'a [EventRecord],
) -> BTreeMap<CalendarDate, Vec<&'a EventRecord>> {
    let mut buckets: BTreeMap<CalendarDate, Vec<&EventRecord>> =
        span.days().map(|day| (day, Vec::new())).collect();

    // Sorting up front makes every per-day bucket come out ordered.
    let mut parsed: Vec<_> = events
        .iter()
        .filter_map(|event| match event.start_local() {
            Some(start) => Some((start, event)),
            None => {
                log::warn!(
                    "skipping event {} ('{}'): unparseable start '{}'",
                    event.id,
                    event.title,
                    event.start_date_time
                );
                None
            }
        })
        .collect();
    parsed.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.cmp(&b.1.id)));

    for (start, event) in parsed {
        let start_day = start.date();
        let end_day = match (&event.end_date_time, event.end_local()) {
            (None, _) => start_day,
            (Some(_), Some(end)) if end.date() >= start_day => end.date(),
            (Some(literal), None) => {
                log::warn!(
                    "event {} ('{}'): unparseable end '{}', showing on start day only",
                    event.id,
                    event.title,
                    literal
                );
                start_day
            }
            // End before start in calendar terms: degrade, don't drop
            (Some(_), Some(_)) => {
                log::debug!("event {}: end precedes start, showing on start day only", event.id);
                start_day
            }
        };

        if end_day < span.start() || start_day > span.end() {
            continue;
        }

        let first = start_day.max(span.start());
        let last = end_day.min(span.end());
        for day in GridSpan::new(first, last).days() {
            // Key exists: buckets were seeded with every day of the span
            buckets.get_mut(&day).unwrap().push(event);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, start: &str, end: Option<&str>) -> EventRecord {
        EventRecord {
            id,
            title: format!("Event {id}"),
            description: None,
            start_date_time: start.into(),
            end_date_time: end.map(Into::into),
            category_id: None,
            category_name: None,
            category_color: None,
        }
    }

    fn march_2024() -> GridSpan {
        GridSpan::of_month(date(2024, 3, 15))
    }

    fn ids(buckets: &BTreeMap<CalendarDate, Vec<&EventRecord>>, day: CalendarDate) -> Vec<i64> {
        buckets[&day].iter().map(|e| e.id).collect()
    }

    #[test]
    fn every_span_day_is_a_key_even_with_no_events() {
        let span = march_2024();
        let buckets = bucket_events(span, &[]);
        assert_eq!(buckets.len(), 42);
        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn start_only_event_lands_on_exactly_one_day() {
        let events = vec![event(1, "2024-03-10T09:00", None)];
        let buckets = bucket_events(march_2024(), &events);

        let occupied: Vec<_> = buckets.iter().filter(|(_, v)| !v.is_empty()).collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(*occupied[0].0, date(2024, 3, 10));
    }

    #[test]
    fn multi_day_event_spans_inclusive_range() {
        // D..D+3 must occupy exactly 4 consecutive buckets
        let events = vec![event(1, "2024-03-10T22:00", Some("2024-03-13T01:00"))];
        let buckets = bucket_events(march_2024(), &events);

        for d in 10..=13 {
            assert_eq!(ids(&buckets, date(2024, 3, d)), vec![1], "day {d}");
        }
        assert!(buckets[&date(2024, 3, 9)].is_empty());
        assert!(buckets[&date(2024, 3, 14)].is_empty());
    }

    #[test]
    fn same_day_end_is_single_day() {
        let events = vec![event(1, "2024-03-10T09:00", Some("2024-03-10T17:00"))];
        let buckets = bucket_events(march_2024(), &events);
        assert_eq!(ids(&buckets, date(2024, 3, 10)), vec![1]);
        assert!(buckets[&date(2024, 3, 11)].is_empty());
    }

    #[test]
    fn unparseable_end_degrades_like_absent_end() {
        let with_bad_end = vec![event(1, "2024-03-10T09:00", Some("not-a-date"))];
        let without_end = vec![event(1, "2024-03-10T09:00", None)];

        let a = bucket_events(march_2024(), &with_bad_end);
        let b = bucket_events(march_2024(), &without_end);

        let occupied_a: Vec<_> = a.iter().map(|(d, v)| (*d, v.iter().map(|e| e.id).collect::<Vec<_>>())).collect();
        let occupied_b: Vec<_> = b.iter().map(|(d, v)| (*d, v.iter().map(|e| e.id).collect::<Vec<_>>())).collect();
        assert_eq!(occupied_a, occupied_b);
    }

    #[test]
    fn inverted_end_degrades_to_start_day() {
        let events = vec![event(1, "2024-03-10T09:00", Some("2024-03-05T09:00"))];
        let buckets = bucket_events(march_2024(), &events);
        assert_eq!(ids(&buckets, date(2024, 3, 10)), vec![1]);
        assert!(buckets[&date(2024, 3, 5)].is_empty());
    }

    #[test]
    fn unparseable_start_skips_the_event_only() {
        let events = vec![
            event(1, "garbage", None),
            event(2, "2024-03-10T09:00", None),
        ];
        let buckets = bucket_events(march_2024(), &events);
        assert_eq!(ids(&buckets, date(2024, 3, 10)), vec![2]);
    }

    #[test]
    fn events_outside_span_are_omitted() {
        let events = vec![event(1, "2024-06-01T09:00", None)];
        let buckets = bucket_events(march_2024(), &events);
        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn boundary_straddling_event_is_clamped_to_span() {
        // March 2024 grid runs Feb 25 .. Apr 6
        let events = vec![event(1, "2024-02-20T09:00", Some("2024-02-27T09:00"))];
        let buckets = bucket_events(march_2024(), &events);

        assert_eq!(ids(&buckets, date(2024, 2, 25)), vec![1]);
        assert_eq!(ids(&buckets, date(2024, 2, 27)), vec![1]);
        let occupied = buckets.values().filter(|v| !v.is_empty()).count();
        assert_eq!(occupied, 3);
    }

    #[test]
    fn within_day_order_is_start_then_id() {
        // The worked example: two events at the same instant plus a span
        // that started earlier
        let events = vec![
            event(1, "2024-03-10T09:00", None),
            event(2, "2024-03-10T09:00", None),
            event(3, "2024-03-08T00:00", Some("2024-03-10T00:00")),
        ];
        let buckets = bucket_events(march_2024(), &events);

        assert_eq!(ids(&buckets, date(2024, 3, 8)), vec![3]);
        assert_eq!(ids(&buckets, date(2024, 3, 9)), vec![3]);
        assert_eq!(ids(&buckets, date(2024, 3, 10)), vec![3, 1, 2]);
    }

    #[test]
    fn id_tie_break_ignores_input_order() {
        let events = vec![
            event(9, "2024-03-10T09:00", None),
            event(4, "2024-03-10T09:00", None),
            event(7, "2024-03-10T09:00", None),
        ];
        let buckets = bucket_events(march_2024(), &events);
        assert_eq!(ids(&buckets, date(2024, 3, 10)), vec![4, 7, 9]);
    }

    #[test]
    fn bucketing_is_idempotent() {
        let events = vec![
            event(1, "2024-03-10T09:00", None),
            event(3, "2024-03-08T00:00", Some("2024-03-12T00:00")),
            event(2, "bad start", None),
        ];
        let first = bucket_events(march_2024(), &events);
        let second = bucket_events(march_2024(), &events);

        assert_eq!(first.keys().collect::<Vec<_>>(), second.keys().collect::<Vec<_>>());
        for (day, bucket) in &first {
            let a: Vec<i64> = bucket.iter().map(|e| e.id).collect();
            let b: Vec<i64> = second[day].iter().map(|e| e.id).collect();
            assert_eq!(a, b);
        }
    }
}
