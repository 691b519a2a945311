//! Optional year and date arguments accepted by [`LiturgicalCalendar`].
//!
//! [`LiturgicalCalendar`]: crate::LiturgicalCalendar

use crate::{CalendarDate, Year};
use chrono::{DateTime, NaiveDate, TimeZone};

/// A year argument: explicit, textual, or "the current year".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearInput {
    /// Resolve to the year of the calendar's clock
    #[default]
    Current,
    Number(i64),
    /// Numeric text such as `"2013"`; anything else is rejected on resolution
    Text(String),
}

impl YearInput {
    /// Zero, empty text and `"0"` stand for the current year, as an omitted
    /// argument would.
    pub(crate) fn is_unset(&self) -> bool {
        match self {
            Self::Current => true,
            Self::Number(n) => *n == 0,
            Self::Text(s) => matches!(s.trim(), "" | "0"),
        }
    }
}

impl From<Year> for YearInput {
    fn from(year: Year) -> Self {
        Self::Number(i64::from(year.get()))
    }
}

impl From<i32> for YearInput {
    fn from(year: i32) -> Self {
        Self::Number(i64::from(year))
    }
}

impl From<i64> for YearInput {
    fn from(year: i64) -> Self {
        Self::Number(year)
    }
}

impl From<u16> for YearInput {
    fn from(year: u16) -> Self {
        Self::Number(i64::from(year))
    }
}

impl From<&str> for YearInput {
    fn from(year: &str) -> Self {
        Self::Text(year.to_owned())
    }
}

impl From<String> for YearInput {
    fn from(year: String) -> Self {
        Self::Text(year)
    }
}

impl<T: Into<Self>> From<Option<T>> for YearInput {
    fn from(year: Option<T>) -> Self {
        year.map_or(Self::Current, Into::into)
    }
}

/// A date argument: a date value, date text, or "today".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    /// Resolve to the calendar's clock
    #[default]
    Today,
    Date(CalendarDate),
    /// Text parsed with [`CalendarDate`]'s `FromStr`; `now` and `today` mean the clock
    Text(String),
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date.into())
    }
}

/// Zoned instants are reduced to their UTC calendar date.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::Date(CalendarDate::from_utc(&instant))
    }
}

impl From<&str> for DateInput {
    fn from(date: &str) -> Self {
        Self::Text(date.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(date: String) -> Self {
        Self::Text(date)
    }
}

impl<T: Into<Self>> From<Option<T>> for DateInput {
    fn from(date: Option<T>) -> Self {
        date.map_or(Self::Today, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_year_input_conversions() {
        assert_eq!(YearInput::from(2013), YearInput::Number(2013));
        assert_eq!(YearInput::from(2013_u16), YearInput::Number(2013));
        assert_eq!(YearInput::from("2013"), YearInput::Text("2013".into()));
        assert_eq!(YearInput::from(None::<i32>), YearInput::Current);
        assert_eq!(YearInput::from(Some(2012)), YearInput::Number(2012));
        assert_eq!(
            YearInput::from(Year::new(2012).unwrap()),
            YearInput::Number(2012)
        );
    }

    #[test]
    fn test_year_input_unset() {
        assert!(YearInput::Current.is_unset());
        assert!(YearInput::Number(0).is_unset());
        assert!(YearInput::from("").is_unset());
        assert!(YearInput::from(" 0 ").is_unset());
        assert!(!YearInput::from(2013).is_unset());
        assert!(!YearInput::from("abc").is_unset());
    }

    #[test]
    fn test_date_input_conversions() {
        let date = CalendarDate::from_ymd(2013, 3, 31).unwrap();
        assert_eq!(DateInput::from(date), DateInput::Date(date));
        assert_eq!(DateInput::from(NaiveDate::from(date)), DateInput::Date(date));
        assert_eq!(DateInput::from(None::<&str>), DateInput::Today);
        assert_eq!(
            DateInput::from("2013-03-31"),
            DateInput::Text("2013-03-31".into())
        );
    }

    #[test]
    fn test_zoned_instant_is_taken_in_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2013, 3, 31, 1, 0, 0).unwrap();
        let expected = CalendarDate::from_ymd(2013, 3, 30).unwrap();
        assert_eq!(DateInput::from(local), DateInput::Date(expected));

        let utc = Utc.with_ymd_and_hms(2013, 3, 31, 23, 59, 59).unwrap();
        let expected = CalendarDate::from_ymd(2013, 3, 31).unwrap();
        assert_eq!(DateInput::from(utc), DateInput::Date(expected));
    }
}
