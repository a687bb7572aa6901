// Committed range module
// Host-owned selection value reported by the picker

use serde::{Deserialize, Serialize};

use crate::models::calendar_date::CalendarDate;
use crate::services::range_geometry;

/// The externally visible selection.
///
/// Either, both or neither bound may be present. Values produced by the
/// picker always have `start <= end` when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawCommittedRange")]
pub struct CommittedRange {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl CommittedRange {
    /// Build a range, reordering the bounds when both are present.
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        match (start, end) {
            (Some(a), Some(b)) => Self::between(a, b),
            _ => Self { start, end },
        }
    }

    /// The empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fully bounded range in either order.
    pub fn between(a: CalendarDate, b: CalendarDate) -> Self {
        let (start, end) = range_geometry::normalize(a, b);
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A one-day range.
    pub fn single(day: CalendarDate) -> Self {
        Self::between(day, day)
    }

    /// Build from raw host strings. Bounds that fail to parse are dropped
    /// instead of producing an error.
    pub fn from_strings(start: Option<&str>, end: Option<&str>) -> Self {
        Self::new(
            start.and_then(CalendarDate::parse_lenient),
            end.and_then(CalendarDate::parse_lenient),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Number of days covered, counting both endpoints.
    pub fn len_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                Some((end.as_naive() - start.as_naive()).num_days() + 1)
            }
            _ => None,
        }
    }
}

/// Wire shape accepted from hosts. Each bound is kept only if it is a
/// parseable date string.
#[derive(Deserialize)]
struct RawCommittedRange {
    #[serde(default)]
    start: Option<serde_json::Value>,
    #[serde(default)]
    end: Option<serde_json::Value>,
}

fn lenient_bound(value: Option<serde_json::Value>) -> Option<CalendarDate> {
    match value? {
        serde_json::Value::String(raw) => CalendarDate::parse_lenient(&raw),
        serde_json::Value::Null => None,
        other => {
            log::warn!("Ignoring non-string date bound: {}", other);
            None
        }
    }
}

impl From<RawCommittedRange> for CommittedRange {
    fn from(raw: RawCommittedRange) -> Self {
        Self::new(lenient_bound(raw.start), lenient_bound(raw.end))
    }
}
