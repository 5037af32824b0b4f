//! Terminal rendering of the month grid and day listings.

use chrono::Datelike;
use owo_colors::OwoColorize;

use calgrid_core::color::{DEFAULT_EVENT_COLOR, lighten, parse_hex};
use calgrid_core::datetime::format_time;
use calgrid_core::grid::GRID_CELLS;
use calgrid_core::{CalendarDate, EventRecord, GridSpan, bucket_events, build_month_grid};

const WEEKDAY_HEADER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render the full month view: grid plus a per-day event listing.
pub fn render_month(reference: CalendarDate, events: &[EventRecord], today: CalendarDate) -> String {
    let grid = build_month_grid(reference);
    let span = GridSpan::new(grid[0].date, grid[GRID_CELLS as usize - 1].date);
    let buckets = bucket_events(span, events);

    let mut lines = Vec::new();

    let first_of_month = reference.with_day(1).unwrap();
    lines.push(format!("{}", first_of_month.format("%B %Y").to_string().bold()));
    lines.push(WEEKDAY_HEADER.map(|d| format!("{d:>4}")).join(" "));

    for week in grid.chunks(7) {
        let row = week
            .iter()
            .map(|cell| {
                let count = buckets[&cell.date].len();
                let marker = if count > 0 { "*" } else { " " };
                let label = format!("{:>3}{}", cell.date.day(), marker);

                if cell.date == today {
                    label.reversed().to_string()
                } else if !cell.in_reference_month {
                    label.dimmed().to_string()
                } else {
                    label
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(row);
    }

    // Listing below the grid: occupied days of the whole span, in order
    let mut listed_any = false;
    for (day, bucket) in &buckets {
        if bucket.is_empty() {
            continue;
        }
        listed_any = true;
        lines.push(String::new());
        lines.push(format!("{}", day.format("%a %b %-d").to_string().bold()));
        for event in bucket {
            lines.push(format!("  {}", event_line(event)));
        }
    }

    if !listed_any {
        lines.push(String::new());
        lines.push("No events this month".dimmed().to_string());
    }

    lines.join("\n")
}

/// Render the events of a single day (the day-detail view).
pub fn render_day(date: CalendarDate, bucket: &[&EventRecord]) -> String {
    let mut lines = vec![format!("{}", date.format("%A, %B %-d, %Y").to_string().bold())];

    if bucket.is_empty() {
        lines.push("No events for this date".dimmed().to_string());
        return lines.join("\n");
    }

    for event in bucket {
        lines.push(event_line(event));
        if let Some(description) = &event.description {
            lines.push(format!("      {}", description.dimmed()));
        }
    }

    lines.join("\n")
}

/// One line per event: colored category marker, time, title.
fn event_line(event: &EventRecord) -> String {
    let marker = category_marker(event);

    let time = match (&event.end_date_time, event.is_multi_day()) {
        // Multi-day spans read better without a clock time
        (_, true) => "multi-day".to_string(),
        (Some(end), false) => {
            let end_time = format_time(end);
            if end_time.is_empty() {
                format_time(&event.start_date_time)
            } else {
                format!("{}-{}", format_time(&event.start_date_time), end_time)
            }
        }
        (None, false) => format_time(&event.start_date_time),
    };

    let mut line = format!("{} {:>11}  {}", marker, time, event.title);
    if let Some(name) = &event.category_name {
        line.push_str(&format!(" {}", format!("[{name}]").dimmed()));
    }
    line
}

/// The category color dot; multi-day events get a lightened tint so spans
/// are distinguishable at a glance, like the original's translucent badge.
fn category_marker(event: &EventRecord) -> String {
    let base = event.category_color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR);
    let color = if event.is_multi_day() {
        lighten(base, 40).unwrap_or_else(|_| base.to_string())
    } else {
        base.to_string()
    };

    match parse_hex(&color) {
        Ok((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        // Unknown color strings degrade to an uncolored marker
        Err(_) => "●".to_string(),
    }
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

    #[test]
    fn month_view_has_header_and_six_week_rows() {
        let out = render_month(date(2024, 3, 15), &[], date(2024, 3, 15));
        let lines: Vec<_> = out.lines().collect();

        assert!(lines[0].contains("March 2024"));
        assert!(lines[1].contains("Sun") && lines[1].contains("Sat"));
        // 6 week rows follow the two header lines
        assert!(lines.len() >= 8);
        assert!(lines[2].contains("25")); // grid starts Feb 25
        assert!(lines[7].contains('6')); // grid ends Apr 6
    }

    #[test]
    fn occupied_days_are_listed_below_the_grid() {
        let events = vec![event(1, "2024-03-10T09:00", Some("2024-03-10T10:00"))];
        let out = render_month(date(2024, 3, 15), &events, date(2024, 3, 1));

        assert!(out.contains("Mar 10"));
        assert!(out.contains("Event 1"));
        assert!(out.contains("09:00-10:00"));
    }

    #[test]
    fn empty_month_says_so() {
        let out = render_month(date(2024, 3, 15), &[], date(2024, 3, 1));
        assert!(out.contains("No events this month"));
    }

    #[test]
    fn multi_day_events_render_without_clock_time() {
        let events = vec![event(1, "2024-03-08T10:00", Some("2024-03-10T08:00"))];
        let out = render_month(date(2024, 3, 15), &events, date(2024, 3, 1));
        assert!(out.contains("multi-day"));
    }

    #[test]
    fn day_view_lists_times_and_descriptions() {
        let mut e = event(1, "2024-03-10T09:00", Some("2024-03-10T10:30"));
        e.description = Some("Bring slides".into());
        let refs: Vec<&EventRecord> = vec![&e];

        let out = render_day(date(2024, 3, 10), &refs);
        assert!(out.contains("Sunday, March 10, 2024"));
        assert!(out.contains("09:00-10:30"));
        assert!(out.contains("Bring slides"));
    }

    #[test]
    fn day_view_handles_empty_bucket() {
        let out = render_day(date(2024, 3, 10), &[]);
        assert!(out.contains("No events for this date"));
    }
}
