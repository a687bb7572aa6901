// Property-based tests for range geometry, month generation and drag commits

mod fixtures;

use chrono::{Datelike, Duration, NaiveDate};
use date_range_picker::models::calendar_date::CalendarDate;
use date_range_picker::models::range::CommittedRange;
use date_range_picker::models::view_cursor::ViewCursor;
use date_range_picker::services::calendar_month;
use date_range_picker::services::range_geometry::{contains, is_endpoint, normalize};
use date_range_picker::ui_egui::drag::DragSelectionState;
use date_range_picker::ui_egui::events::PickerEvent;
use fixtures::Host;
use proptest::prelude::*;

/// Any day between 1900-01-01 and roughly 2100
fn any_date() -> impl Strategy<Value = CalendarDate> {
    (0i64..73_000).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        CalendarDate::from(base + Duration::days(offset))
    })
}

proptest! {
    /// Property: normalize orders the pair and keeps both dates
    #[test]
    fn prop_normalize_orders_pair(a in any_date(), b in any_date()) {
        let (x, y) = normalize(a, b);
        prop_assert!(x <= y);
        prop_assert!((x == a && y == b) || (x == b && y == a));
    }

    /// Property: containment does not depend on bound order
    #[test]
    fn prop_contains_is_order_independent(d in any_date(), a in any_date(), b in any_date()) {
        prop_assert_eq!(contains(d, Some(a), Some(b)), contains(d, Some(b), Some(a)));
    }

    /// Property: both bounds are always contained and always endpoints
    #[test]
    fn prop_bounds_are_contained_endpoints(a in any_date(), b in any_date()) {
        prop_assert!(contains(a, Some(a), Some(b)));
        prop_assert!(contains(b, Some(a), Some(b)));
        prop_assert!(is_endpoint(a, &[Some(a), Some(b)]));
        prop_assert!(is_endpoint(b, &[Some(b), None]));
    }

    /// Property: generated months match the Gregorian calendar
    #[test]
    fn prop_month_length_matches_gregorian(year in 1600..2400i32, month_index in 0..12u32) {
        let month = calendar_month::generate(year, month_index);
        let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1).unwrap();
        let next = ViewCursor::new(year, month_index as i32 + 1);
        let next_first = NaiveDate::from_ymd_opt(next.year(), next.month_index() + 1, 1).unwrap();

        prop_assert_eq!(month.days.len() as i64, (next_first - first).num_days());
        prop_assert_eq!(month.leading_blank_count, first.weekday().num_days_from_monday());
        prop_assert!(month.leading_blank_count <= 6);
    }

    /// Property: twelve steps forward land on the same month next year
    #[test]
    fn prop_twelve_nexts_is_one_year(year in -5000..5000i32, month_index in 0..12i32) {
        let start = ViewCursor::new(year, month_index);
        let mut cursor = start;
        for _ in 0..12 {
            cursor = cursor.successor();
        }
        prop_assert_eq!(cursor, ViewCursor::new(year + 1, month_index));

        for _ in 0..12 {
            cursor = cursor.predecessor();
        }
        prop_assert_eq!(cursor, start);
    }

    /// Property: any drag commits the normalized anchor/cursor pair
    #[test]
    fn prop_drag_commits_normalized(
        anchor in any_date(),
        path in proptest::collection::vec(any_date(), 0..6),
    ) {
        let mut state = DragSelectionState::default();
        state.press(anchor);
        for day in &path {
            state.hover_enter(*day);
        }
        let last = path.last().copied().unwrap_or(anchor);

        let committed = state.release().unwrap();
        prop_assert_eq!(committed, CommittedRange::between(anchor, last));
        prop_assert!(committed.start <= committed.end);
    }

    /// Property: an aborted drag never changes the host's value
    #[test]
    fn prop_aborted_drag_keeps_value(a in any_date(), b in any_date(), d in any_date()) {
        let previous = CommittedRange::between(a, b);
        let mut host = Host::new(previous);

        host.send_all([
            PickerEvent::Toggle,
            PickerEvent::Press(d),
            PickerEvent::HoverEnter(a),
            PickerEvent::PointerLeft,
            PickerEvent::Release,
        ]);

        prop_assert!(host.changes.is_empty());
        prop_assert_eq!(host.value, previous);
    }

    /// Property: clear always empties the range
    #[test]
    fn prop_clear_always_empties(a in any_date(), b in any_date(), dragging in any::<bool>()) {
        let mut host = Host::new(CommittedRange::between(a, b));
        host.send(PickerEvent::Toggle);
        if dragging {
            host.send(PickerEvent::Press(a));
        }
        host.send(PickerEvent::Clear);

        prop_assert_eq!(host.value, CommittedRange::empty());
        prop_assert!(!host.state.view().drag().is_active());
    }
}
