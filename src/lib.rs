//! Dates and seasons of the Roman Catholic liturgical calendar.
//!
//! Everything hangs off Easter Sunday: Ash Wednesday, Ascension and
//! Pentecost are fixed offsets from it, while Advent and Christmastide are
//! anchored to the weekday of Christmas Eve and of January 7. On top of
//! those dates [`LiturgicalCalendar::year_time`] classifies any day into one
//! of five [`LiturgicalTime`]s.
//!
//! ```
//! use liturgical_calendar::{LiturgicalCalendar, LiturgicalTime};
//!
//! let calendar = LiturgicalCalendar::new();
//! assert_eq!(calendar.easter_date(2013).unwrap().to_string(), "2013-03-31");
//! assert_eq!(calendar.year_time("2012-12-20").unwrap(), LiturgicalTime::Advent);
//! assert_eq!(calendar.ordinary_week("2013-01-30").unwrap(), Some(3));
//! ```

#[macro_use]
mod logging;

mod calendar;
mod clock;
mod consts;
mod easter;
mod holidays;
mod input;
mod prelude;
mod season;
mod types;
mod window;

pub use calendar::LiturgicalCalendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use easter::gregorian_easter;
pub use holidays::{FixedHoliday, Rank, fixed_holiday_on, fixed_holidays};
pub use input::{DateInput, YearInput};
pub use season::LiturgicalTime;
pub use types::{Month, Year};
pub use window::SeasonWindow;

use crate::prelude::*;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc, Weekday};
use std::str::FromStr;

/// A timezone-agnostic calendar day.
///
/// Values are immutable: [`add_days`](Self::add_days) and
/// [`sub_days`](Self::sub_days) return new dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct CalendarDate(NaiveDate);

/// Errors from parsing years, months, days and date strings.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for every calendar operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year argument that is not a number, or not a year this crate handles.
    #[error("Invalid year notation: {0}")]
    InvalidYear(ParseError),

    /// A date argument that could not be parsed.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    /// Day arithmetic left the representable range of dates.
    #[error("Date out of range: {date} shifted by {days} days")]
    OutOfRange { date: CalendarDate, days: i64 },

    /// A season window whose start falls after its end.
    #[error("Invalid season window: start ({start}) is after end ({end})")]
    InvalidWindow {
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` for a month outside 1-12,
    /// `ParseError::InvalidYear` for a year chrono cannot represent and
    /// `ParseError::InvalidDay` for a day the month does not have.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month = Month::new(month)?;
        NaiveDate::from_ymd_opt(year, month.number(), 1)
            .ok_or(ParseError::InvalidYear(i64::from(year)))?;
        NaiveDate::from_ymd_opt(year, month.number(), day.into())
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                month: month.get(),
                day,
                year,
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Days since the preceding Sunday (0 on a Sunday)
    pub fn days_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// 1-based ordinal day within the year
    #[allow(clippy::cast_possible_truncation)]
    pub fn day_of_year(&self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Month and day packed as `MMDD` (1225 for December 25)
    pub fn month_day_code(&self) -> u16 {
        u16::from(self.month()) * 100 + u16::from(self.day())
    }

    /// Returns the date `days` later.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` past chrono's last representable day.
    pub fn add_days(self, days: u32) -> Result<Self, CalendarError> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .map(Self)
            .ok_or(CalendarError::OutOfRange {
                date: self,
                days: i64::from(days),
            })
    }

    /// Returns the date `days` earlier.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` before chrono's first representable day.
    pub fn sub_days(self, days: u32) -> Result<Self, CalendarError> {
        self.0
            .checked_sub_days(Days::new(u64::from(days)))
            .map(Self)
            .ok_or(CalendarError::OutOfRange {
                date: self,
                days: -i64::from(days),
            })
    }

    /// Signed number of days from `earlier` to `self` (negative when `self`
    /// comes first).
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Number of whole days between the two dates, regardless of order.
    pub fn days_between(self, other: Self) -> u32 {
        u32::try_from(self.days_since(other).unsigned_abs()).unwrap_or(u32::MAX)
    }

    /// Calendar date of an instant, taken in UTC.
    pub fn from_utc<Tz: chrono::TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc).date_naive())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts `YYYY-MM-DD`, `MM/DD/YYYY`, RFC 3339 timestamps and
    /// `YYYY-MM-DD HH:MM[:SS]` local timestamps. Padding of the month and
    /// day is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if trimmed.contains(TIME_SEPARATOR) {
            return Self::from_timestamp(trimmed);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        if has_hyphen {
            // ISO format: YYYY-MM-DD
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [year, month, day] => Self::from_parts(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
                ))),
            }
        } else if has_slash {
            // Month-first format: MM/DD/YYYY
            let parts: Vec<&str> = trimmed
                .split(MONTH_FIRST_SEPARATOR)
                .map(str::trim)
                .collect();
            match parts.as_slice() {
                [month, day, year] => Self::from_parts(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected MM{MONTH_FIRST_SEPARATOR}DD{MONTH_FIRST_SEPARATOR}YYYY, found {trimmed}"
                ))),
            }
        } else {
            Err(ParseError::InvalidFormat(trimmed.to_owned()))
        }
    }
}

/// Timestamps without an offset; the date is taken as written.
const LOCAL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl CalendarDate {
    /// An offset timestamp is reduced to its UTC date, a local one to the
    /// date it names.
    fn from_timestamp(s: &str) -> Result<Self, ParseError> {
        // RFC 3339 allows lowercase `t` and `z`
        let normalized = s.to_ascii_uppercase();
        let rfc3339 = match DateTime::parse_from_rfc3339(&normalized) {
            Ok(instant) => return Ok(Self::from_utc(&instant)),
            Err(e) => e,
        };
        LOCAL_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
            .map(|local| Self(local.date()))
            .ok_or_else(|| ParseError::InvalidFormat(format!("{s}: {rfc3339}")))
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn from_parts(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        // InvalidFormat if not numeric
        let year = Year::new(Self::parse_u16(year)?)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;

        // chrono decides whether the month has that day
        Self::from_ymd(year.as_i32(), month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
