//! Month view grid construction.
//!
//! The month view is always a 6×7 grid: the reference month's days plus
//! enough leading days of the previous month to start on a Sunday and
//! enough trailing days of the next month to reach 42 cells.

use chrono::{Datelike, Days};

use crate::CalendarDate;

/// Number of cells in a month grid: 6 weeks of 7 days.
pub const GRID_CELLS: u64 = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: CalendarDate,
    /// False for the previous/next-month days that pad the grid.
    pub in_reference_month: bool,
}

/// Build the 42-cell grid for the month containing `reference`.
///
/// Only the (year, month) of `reference` matters. The result always starts
/// on the Sunday at or before the 1st of the month and the dates increase
/// by exactly one day per cell. Total: every date maps to a valid grid.
pub fn build_month_grid(reference: CalendarDate) -> Vec<GridCell> {
    // Day 1 exists in every month
    let first_of_month = reference.with_day(1).unwrap();
    let offset = first_of_month.weekday().num_days_from_sunday() as u64;
    let grid_start = first_of_month - Days::new(offset);

    (0..GRID_CELLS)
        .map(|i| {
            let date = grid_start + Days::new(i);
            GridCell {
                date,
                in_reference_month: date.month() == reference.month()
                    && date.year() == reference.year(),
            }
        })
        .collect()
}

/// First and last day of the month containing `reference`.
/// Used to scope event fetches to the visible month.
pub fn month_range(reference: CalendarDate) -> (CalendarDate, CalendarDate) {
    let first = reference.with_day(1).unwrap();
    let last = match first.with_month(first.month() + 1) {
        Some(next_first) => next_first - Days::new(1),
        // December wraps to January 1st of the next year
        None => CalendarDate::from_ymd_opt(first.year() + 1, 1, 1).unwrap() - Days::new(1),
    };
    (first, last)
}

/// An inclusive range of calendar days, usually the span of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    start: CalendarDate,
    end: CalendarDate,
}

impl GridSpan {
    /// A reversed span can only come from a programming error, so this
    /// fails fast instead of degrading.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        assert!(start <= end, "GridSpan start {start} is after end {end}");
        GridSpan { start, end }
    }

    /// The span covered by the month grid of `reference`.
    pub fn of_month(reference: CalendarDate) -> Self {
        let grid = build_month_grid(reference);
        GridSpan::new(grid[0].date, grid[grid.len() - 1].date)
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the span in order.
    pub fn days(self) -> impl Iterator<Item = CalendarDate> {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_42_consecutive_days() {
        let grid = build_month_grid(date(2024, 3, 15));
        assert_eq!(grid.len(), 42);
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    #[test]
    fn grid_starts_on_sunday_before_the_first() {
        // March 2024 starts on a Friday, so 5 leading February days
        let grid = build_month_grid(date(2024, 3, 15));
        assert_eq!(grid[0].date, date(2024, 2, 25));
        assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        assert_eq!(grid[5].date, date(2024, 3, 1));
        assert!(!grid[4].in_reference_month);
        assert!(grid[5].in_reference_month);
    }

    #[test]
    fn first_of_month_lands_at_its_weekday_offset() {
        for reference in [
            date(2024, 2, 1), // leap February
            date(2024, 9, 1), // month starting on Sunday
            date(2023, 12, 25),
            date(2026, 8, 29),
        ] {
            let grid = build_month_grid(reference);
            let first = reference.with_day(1).unwrap();
            let offset = first.weekday().num_days_from_sunday() as usize;
            assert_eq!(grid[offset].date, first);
            assert!(grid[offset].in_reference_month);
        }
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_padding() {
        // September 2024 starts on a Sunday
        let grid = build_month_grid(date(2024, 9, 10));
        assert_eq!(grid[0].date, date(2024, 9, 1));
        assert!(grid[0].in_reference_month);
    }

    #[test]
    fn reference_day_and_time_are_irrelevant() {
        assert_eq!(
            build_month_grid(date(2024, 3, 1)),
            build_month_grid(date(2024, 3, 31))
        );
    }

    #[test]
    fn padding_cells_are_marked_out_of_month() {
        let grid = build_month_grid(date(2024, 3, 15));
        let in_month = grid.iter().filter(|c| c.in_reference_month).count();
        assert_eq!(in_month, 31);
        assert!(!grid[41].in_reference_month);
        assert_eq!(grid[41].date, date(2024, 4, 6));
    }

    #[test]
    fn month_range_handles_month_lengths_and_december() {
        assert_eq!(
            month_range(date(2024, 2, 10)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_range(date(2023, 12, 25)),
            (date(2023, 12, 1), date(2023, 12, 31))
        );
    }

    #[test]
    fn span_days_are_inclusive() {
        let span = GridSpan::new(date(2024, 3, 1), date(2024, 3, 3));
        let days: Vec<_> = span.days().collect();
        assert_eq!(days, vec![date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 3)]);
        assert!(span.contains(date(2024, 3, 2)));
        assert!(!span.contains(date(2024, 3, 4)));
    }

    #[test]
    fn span_of_month_matches_grid_bounds() {
        let span = GridSpan::of_month(date(2024, 3, 15));
        assert_eq!(span.start(), date(2024, 2, 25));
        assert_eq!(span.end(), date(2024, 4, 6));
        assert_eq!(span.days().count(), 42);
    }

    #[test]
    #[should_panic(expected = "GridSpan start")]
    fn reversed_span_fails_fast() {
        GridSpan::new(date(2024, 3, 2), date(2024, 3, 1));
    }
}
