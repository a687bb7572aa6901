//! Order-independent range predicates over calendar dates.
//!
//! These are evaluated both against the committed range and against a live
//! drag, so none of them assume their bounds arrive in order.

use crate::models::calendar_date::CalendarDate;

/// Reorder two dates into `(earliest, latest)`.
pub fn normalize(a: CalendarDate, b: CalendarDate) -> (CalendarDate, CalendarDate) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Whether `date` lies between the two bounds inclusive, in either order.
///
/// A missing bound means there is no range to be inside of, so the result is
/// `false`.
pub fn contains(date: CalendarDate, a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            let (earliest, latest) = normalize(a, b);
            earliest <= date && date <= latest
        }
        _ => false,
    }
}

/// Whether `date` equals any present candidate. Absent candidates never match.
pub fn is_endpoint(date: CalendarDate, candidates: &[Option<CalendarDate>]) -> bool {
    candidates.iter().flatten().any(|candidate| *candidate == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_swaps_inverted_pair() {
        let (a, b) = (date(2024, 3, 10), date(2024, 3, 5));
        assert_eq!(normalize(a, b), (b, a));
        assert_eq!(normalize(b, a), (b, a));
    }

    #[test]
    fn test_normalize_equal_dates() {
        let d = date(2024, 3, 10);
        assert_eq!(normalize(d, d), (d, d));
    }

    #[test]
    fn test_contains_inclusive_both_orders() {
        let (a, b) = (date(2024, 1, 15), date(2024, 1, 20));
        for candidate in [a, date(2024, 1, 17), b] {
            assert!(contains(candidate, Some(a), Some(b)));
            assert!(contains(candidate, Some(b), Some(a)));
        }
        assert!(!contains(date(2024, 1, 14), Some(a), Some(b)));
        assert!(!contains(date(2024, 1, 21), Some(b), Some(a)));
    }

    #[test]
    fn test_contains_requires_both_bounds() {
        let d = date(2024, 1, 15);
        assert!(!contains(d, Some(d), None));
        assert!(!contains(d, None, Some(d)));
        assert!(!contains(d, None, None));
    }

    #[test]
    fn test_contains_across_month_boundary() {
        let (a, b) = (date(2024, 2, 27), date(2024, 3, 2));
        assert!(contains(date(2024, 2, 29), Some(b), Some(a)));
        assert!(contains(date(2024, 3, 1), Some(a), Some(b)));
    }

    #[test]
    fn test_is_endpoint_ignores_absent_candidates() {
        let d = date(2024, 1, 15);
        assert!(is_endpoint(d, &[None, Some(d)]));
        assert!(is_endpoint(d, &[Some(d), None]));
        assert!(!is_endpoint(d, &[None, None]));
        assert!(!is_endpoint(d, &[Some(date(2024, 1, 16))]));
        assert!(!is_endpoint(d, &[]));
    }
}
