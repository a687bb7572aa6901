//! Month grid generation.
//!
//! Produces the days of one month plus the number of blank cells needed
//! before day 1 in a Monday-first week layout.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar_date::CalendarDate;
use crate::models::view_cursor::ViewCursor;

/// Weekday column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub cursor: ViewCursor,
    /// Day 1..=N in ascending order
    pub days: Vec<CalendarDate>,
    /// Empty cells before day 1, in 0..=6
    pub leading_blank_count: u32,
}

impl CalendarMonth {
    /// Total grid cells (blanks plus days).
    pub fn cell_count(&self) -> usize {
        self.leading_blank_count as usize + self.days.len()
    }

    /// Number of week rows the grid needs.
    pub fn week_rows(&self) -> usize {
        self.cell_count().div_ceil(7)
    }

    /// Grid cells in row-major order: `None` for each leading blank, then
    /// every day of the month.
    pub fn cells(&self) -> impl Iterator<Item = Option<CalendarDate>> + '_ {
        std::iter::repeat(None)
            .take(self.leading_blank_count as usize)
            .chain(self.days.iter().copied().map(Some))
    }
}

/// Generate the month identified by `year` and zero-based `month_index`.
///
/// Callers are expected to pass a month index in `0..=11`; anything else is
/// rolled into the neighbouring year the same way [`ViewCursor::new`] does.
/// Years outside chrono's supported range produce an empty month.
pub fn generate(year: i32, month_index: u32) -> CalendarMonth {
    debug_assert!(month_index < 12, "month index {} not normalized", month_index);
    let cursor = ViewCursor::new(year, month_index as i32);
    generate_for(cursor)
}

/// Generate the month a cursor points at.
pub fn generate_for(cursor: ViewCursor) -> CalendarMonth {
    let month = cursor.month_index() + 1;
    let Some(first) = NaiveDate::from_ymd_opt(cursor.year(), month, 1) else {
        log::warn!("Cannot generate month {:?}: year out of range", cursor);
        return CalendarMonth {
            cursor,
            days: Vec::new(),
            leading_blank_count: 0,
        };
    };

    let days = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(CalendarDate::from)
        .collect();

    // Rotate a Sunday-first weekday index into a Monday-first blank count
    let weekday_of_first = first.weekday().num_days_from_sunday();
    let leading_blank_count = (weekday_of_first + 6) % 7;

    CalendarMonth {
        cursor,
        days,
        leading_blank_count,
    }
}
