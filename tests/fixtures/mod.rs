// Test fixtures - reusable test data
// Provides consistent dates and a host harness across test files

#![allow(dead_code)]

use date_range_picker::models::calendar_date::CalendarDate;
use date_range_picker::models::range::CommittedRange;
use date_range_picker::ui_egui::events::PickerEvent;
use date_range_picker::ui_egui::picker::DateRangePickerState;

/// Shorthand for a date known to be valid
pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> CalendarDate {
        date(2024, 2, 29)
    }

    /// Dec 31, 2024 (last day before a year rollover)
    pub fn new_years_eve_2024() -> CalendarDate {
        date(2024, 12, 31)
    }
}

/// Stand-in for the page that owns the committed range.
///
/// Stores every reported change the way a real host would store the value
/// passed to `on_change`.
pub struct Host {
    pub value: CommittedRange,
    pub changes: Vec<CommittedRange>,
    pub state: DateRangePickerState,
}

impl Host {
    pub fn new(value: CommittedRange) -> Self {
        Self {
            value,
            changes: Vec::new(),
            state: DateRangePickerState::default(),
        }
    }

    pub fn send(&mut self, event: PickerEvent) {
        if let Some(next) = self.state.handle(event, &self.value) {
            self.value = next;
            self.changes.push(next);
        }
    }

    pub fn send_all(&mut self, events: impl IntoIterator<Item = PickerEvent>) {
        for event in events {
            self.send(event);
        }
    }
}
