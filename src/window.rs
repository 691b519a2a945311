use serde::Serialize;

use crate::{CalendarDate, CalendarError, prelude::*};

/// An inclusive span of days belonging to one season, such as Lent of a
/// given year. The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{start}/{end}")]
pub struct SeasonWindow {
    start: CalendarDate,
    end:   CalendarDate,
}

impl SeasonWindow {
    /// Creates a new window with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWindow` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window of `start` and the `length` days that follow it.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the end is not representable.
    pub fn starting_at(start: CalendarDate, length: u32) -> Result<Self, CalendarError> {
        Self::new(start, start.add_days(length)?)
    }

    /// Window of `end` and the `length` days that precede it.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the start is not representable.
    pub fn ending_at(end: CalendarDate, length: u32) -> Result<Self, CalendarError> {
        Self::new(end.sub_days(length)?, end)
    }

    /// First day of the window
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Last day of the window (inclusive)
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Days from the first day to the last day; a single-day window has length 0.
    pub fn length(&self) -> u32 {
        self.end.days_between(self.start)
    }

    /// Checks if the window contains a given date
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this window shares at least one day with another window
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterates over every day of the window in order
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let start = self.start;
        (0..=self.length()).map_while(move |offset| start.add_days(offset).ok())
    }
}
