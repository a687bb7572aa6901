// View cursor module
// Identifies the left-hand month shown by the dual-month view

use chrono::NaiveDate;

use crate::models::calendar_date::CalendarDate;

/// Left-hand displayed month. The right-hand month is always
/// [`ViewCursor::successor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewCursor {
    year: i32,
    month_index: u32,
}

impl ViewCursor {
    /// Create a cursor, rolling an out-of-range month index into the
    /// neighbouring years (`(2024, 12)` is January 2025, `(2024, -1)` is
    /// December 2023).
    pub fn new(year: i32, month_index: i32) -> Self {
        let total = i64::from(year) * 12 + i64::from(month_index);
        Self {
            year: total.div_euclid(12) as i32,
            month_index: total.rem_euclid(12) as u32,
        }
    }

    /// Cursor for the month containing `date`.
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month_index: date.month_index(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (0 = January).
    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    /// Move by `delta` months in either direction.
    pub fn shift(&self, delta: i32) -> Self {
        Self::new(self.year, self.month_index as i32 + delta)
    }

    pub fn successor(&self) -> Self {
        self.shift(1)
    }

    pub fn predecessor(&self) -> Self {
        self.shift(-1)
    }

    /// First day of the month, if the year is inside chrono's range.
    pub fn first_day(&self) -> Option<CalendarDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1).map(CalendarDate::from)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month_index() == self.month_index
    }

    /// Month header such as "March 2024".
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(first) => first.format("%B %Y"),
            None => format!("{:02}/{}", self.month_index + 1, self.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_overflow() {
        assert_eq!(ViewCursor::new(2024, 12), ViewCursor::new(2025, 0));
        assert_eq!(ViewCursor::new(2024, -1), ViewCursor::new(2023, 11));
        assert_eq!(ViewCursor::new(2024, 25).year(), 2026);
        assert_eq!(ViewCursor::new(2024, 25).month_index(), 1);
    }

    #[test]
    fn test_successor_rolls_year() {
        let december = ViewCursor::new(2024, 11);
        let next = december.successor();
        assert_eq!(next.year(), 2025);
        assert_eq!(next.month_index(), 0);
    }

    #[test]
    fn test_predecessor_rolls_year() {
        let january = ViewCursor::new(2024, 0);
        let previous = january.predecessor();
        assert_eq!(previous.year(), 2023);
        assert_eq!(previous.month_index(), 11);
    }

    #[test]
    fn test_from_date_and_contains() {
        let date = CalendarDate::new(2024, 3, 10).unwrap();
        let cursor = ViewCursor::from_date(date);
        assert_eq!(cursor, ViewCursor::new(2024, 2));
        assert!(cursor.contains(date));
        assert!(!cursor.successor().contains(date));
    }

    #[test]
    fn test_label() {
        assert_eq!(ViewCursor::new(2024, 2).label(), "March 2024");
    }
}
