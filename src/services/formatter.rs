//! Trigger label formatting for a committed range.

use crate::models::calendar_date::CalendarDate;
use crate::models::range::CommittedRange;
use crate::models::settings::PickerSettings;

/// Renders committed ranges as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFormatter {
    pattern: &'static str,
    separator: String,
}

impl Default for RangeFormatter {
    fn default() -> Self {
        Self::new("DD/MM/YYYY", " - ")
    }
}

impl RangeFormatter {
    /// # Arguments
    /// * `date_format` - The format preference (e.g., "DD/MM/YYYY", "MM/DD/YYYY", "YYYY-MM-DD").
    ///   Unknown values fall back to day/month/year.
    /// * `separator` - Text placed between the two bounds
    pub fn new(date_format: &str, separator: impl Into<String>) -> Self {
        Self {
            pattern: strftime_pattern(date_format),
            separator: separator.into(),
        }
    }

    pub fn from_settings(settings: &PickerSettings) -> Self {
        Self::new(&settings.date_format, settings.separator.clone())
    }

    pub fn format_date(&self, date: CalendarDate) -> String {
        date.format(self.pattern)
    }

    /// Format both bounds, a single bound, or the placeholder when the range
    /// is empty.
    pub fn format(&self, range: &CommittedRange, placeholder: &str) -> String {
        match (range.start, range.end) {
            (Some(start), Some(end)) => format!(
                "{}{}{}",
                self.format_date(start),
                self.separator,
                self.format_date(end)
            ),
            (Some(bound), None) | (None, Some(bound)) => self.format_date(bound),
            (None, None) => placeholder.to_string(),
        }
    }
}

fn strftime_pattern(date_format: &str) -> &'static str {
    if date_format.starts_with("MM/DD") || date_format.starts_with("mm/dd") {
        "%m/%d/%Y"
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        "%Y-%m-%d"
    } else {
        "%d/%m/%Y"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_format_both_bounds() {
        let range = CommittedRange::between(date(2024, 3, 5), date(2024, 3, 10));
        assert_eq!(
            RangeFormatter::default().format(&range, "Pick"),
            "05/03/2024 - 10/03/2024"
        );
    }

    #[test]
    fn test_format_single_bound() {
        let formatter = RangeFormatter::default();
        let start_only = CommittedRange::new(Some(date(2024, 3, 5)), None);
        let end_only = CommittedRange::new(None, Some(date(2024, 12, 25)));
        assert_eq!(formatter.format(&start_only, "Pick"), "05/03/2024");
        assert_eq!(formatter.format(&end_only, "Pick"), "25/12/2024");
    }

    #[test]
    fn test_format_placeholder() {
        assert_eq!(
            RangeFormatter::default().format(&CommittedRange::empty(), "Select dates"),
            "Select dates"
        );
    }

    #[test]
    fn test_format_preferences() {
        let range = CommittedRange::between(date(2024, 1, 2), date(2024, 2, 3));
        assert_eq!(
            RangeFormatter::new("MM/DD/YYYY", " to ").format(&range, ""),
            "01/02/2024 to 02/03/2024"
        );
        assert_eq!(
            RangeFormatter::new("YYYY-MM-DD", " – ").format(&range, ""),
            "2024-01-02 – 2024-02-03"
        );
    }

    #[test]
    fn test_from_settings() {
        let settings = PickerSettings {
            date_format: "YYYY-MM-DD".to_string(),
            separator: " .. ".to_string(),
            ..PickerSettings::default()
        };
        let range = CommittedRange::single(date(2024, 7, 4));
        assert_eq!(
            RangeFormatter::from_settings(&settings).format(&range, ""),
            "2024-07-04 .. 2024-07-04"
        );
    }
}
