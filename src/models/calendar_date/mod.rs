// Calendar date module
// Day-granularity date value used by every part of the picker

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// ISO format used for serialization and `Display`.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("could not parse '{0}' as a calendar date")]
    Unparseable(String),
}

/// A calendar day with no time-of-day component.
///
/// Equality and ordering are by calendar day. Values can only be built
/// through validated constructors, so an impossible day/month combination
/// never reaches the calendar logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from a year, a one-based month and a day.
    ///
    /// # Examples
    /// ```
    /// use date_range_picker::models::calendar_date::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2024, 2, 29).is_ok());
    /// assert!(CalendarDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parse a host-supplied date string.
    ///
    /// Accepts `YYYY-MM-DD`, `DD/MM/YYYY` and RFC 3339 date-times, in which
    /// case only the date part is kept.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let trimmed = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
            return Ok(Self(date));
        }
        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(date_time.date_naive()));
        }

        Err(DateError::Unparseable(input.to_string()))
    }

    /// Parse at the host boundary, treating anything unparseable as absent.
    pub fn parse_lenient(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(date) => Some(date),
            Err(err) => {
                log::warn!("Ignoring date bound: {}", err);
                None
            }
        }
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// One-based month (1 = January).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Zero-based month index (0 = January).
    pub fn month_index(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Format with a chrono `strftime` pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
