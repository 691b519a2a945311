use crate::clock::{Clock, SystemClock};
use crate::consts::{
    ADVENT_REFERENCE_DAY, ADVENT_SUNDAYS, AFTER_EPIPHANY, ASCENSION_OFFSET, CHRISTMAS_DAY,
    CHRISTMAS_EVE, DAYS_IN_WEEK, DECEMBER, EASTER_DURATION, JANUARY, LENT_DURATION, MARCH,
    PENTECOST_OFFSET, SEPTEMBER,
};
use crate::{
    CalendarDate, CalendarError, DateInput, LiturgicalTime, SeasonWindow, Year, YearInput,
    easter::gregorian_easter,
};

/// Moveable feasts, season bounds and liturgical time for any civil year.
///
/// Every operation takes an optional year or date; omitted values are taken
/// from the calendar's [`Clock`]. The calendar holds no other state, so any
/// number of callers may share one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiturgicalCalendar<C = SystemClock> {
    clock: C,
}

impl LiturgicalCalendar {
    /// A calendar reading "today" from the system clock in UTC.
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> LiturgicalCalendar<C> {
    /// A calendar reading "today" from `clock`.
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The clock that stands in for omitted arguments.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    // --- argument normalization ---

    /// Resolves an optional year argument.
    ///
    /// Zero, empty text and [`YearInput::Current`] mean the clock's year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for non-numeric text or a number
    /// outside `1..=9999`.
    pub fn resolve_year(&self, year: impl Into<YearInput>) -> Result<Year, CalendarError> {
        let parsed = match year.into() {
            year if year.is_unset() => return self.current_year(),
            YearInput::Number(n) => Year::try_from(n),
            YearInput::Text(s) => s.parse(),
            YearInput::Current => return self.current_year(),
        };
        parsed.map_err(CalendarError::InvalidYear)
    }

    fn current_year(&self) -> Result<Year, CalendarError> {
        let today = self.clock.today();
        debug!("no year given, using {} from the clock", today.year());
        Year::try_from(today.year()).map_err(CalendarError::InvalidYear)
    }

    /// Resolves an optional date argument.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for text that is not a date.
    pub fn resolve_date(&self, date: impl Into<DateInput>) -> Result<CalendarDate, CalendarError> {
        match date.into() {
            DateInput::Today => Ok(self.clock.today()),
            DateInput::Date(date) => Ok(date),
            DateInput::Text(s) if is_today_keyword(&s) => Ok(self.clock.today()),
            DateInput::Text(s) => Ok(s.parse()?),
        }
    }

    fn year_number(&self, year: impl Into<YearInput>) -> Result<i32, CalendarError> {
        self.resolve_year(year).map(Year::as_i32)
    }

    // --- Easter and the dates that move with it ---

    /// Easter Sunday of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn easter_date(&self, year: impl Into<YearInput>) -> Result<CalendarDate, CalendarError> {
        easter_in(self.year_number(year)?)
    }

    /// Ash Wednesday of `year`, [`LENT_DURATION`](crate::LENT_DURATION) days
    /// before the Easter vigil. Always a Wednesday.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn ash_wednesday(&self, year: impl Into<YearInput>) -> Result<CalendarDate, CalendarError> {
        ash_wednesday_in(self.year_number(year)?)
    }

    /// Ascension, kept on the Sunday: [`ASCENSION_OFFSET`](crate::ASCENSION_OFFSET)
    /// days after the Easter vigil.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn ascension(&self, year: impl Into<YearInput>) -> Result<CalendarDate, CalendarError> {
        ascension_in(self.year_number(year)?)
    }

    /// Pentecost, one week after Ascension Sunday.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn pentecost(&self, year: impl Into<YearInput>) -> Result<CalendarDate, CalendarError> {
        pentecost_in(self.year_number(year)?)
    }

    // --- Advent ---

    /// The four Sundays of Advent of `year`, in chronological order.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn advent_sundays(
        &self,
        year: impl Into<YearInput>,
    ) -> Result<[CalendarDate; ADVENT_SUNDAYS], CalendarError> {
        advent_sundays_in(self.year_number(year)?)
    }

    /// First Sunday of Advent of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn advent_start(&self, year: impl Into<YearInput>) -> Result<CalendarDate, CalendarError> {
        advent_start_in(self.year_number(year)?)
    }

    /// First day of the liturgical year beginning in `year`; same as
    /// [`advent_start`](Self::advent_start).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn year_start(&self, year: impl Into<YearInput>) -> Result<CalendarDate, CalendarError> {
        self.advent_start(year)
    }

    /// Days between the first Sunday of Advent and December 15 of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn advent_length(&self, year: impl Into<YearInput>) -> Result<u32, CalendarError> {
        advent_length_in(self.year_number(year)?)
    }

    // --- Christmastide ---

    /// Last day of the Christmastide that ends in `year`: the Sunday on or
    /// after January 7.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn christmas_time_end(
        &self,
        year: impl Into<YearInput>,
    ) -> Result<CalendarDate, CalendarError> {
        christmas_time_end_in(self.year_number(year)?)
    }

    /// Days from December 25 of `year - 1` to the end of Christmastide.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn christmas_time_length(&self, year: impl Into<YearInput>) -> Result<u32, CalendarError> {
        Ok(christmas_window_in(self.year_number(year)?)?.length())
    }

    // --- season windows ---

    /// Easter Sunday through the [`EASTER_DURATION`](crate::EASTER_DURATION)
    /// days after it.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn easter_window(&self, year: impl Into<YearInput>) -> Result<SeasonWindow, CalendarError> {
        easter_window_in(self.year_number(year)?)
    }

    /// Ash Wednesday through Holy Saturday.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn lent_window(&self, year: impl Into<YearInput>) -> Result<SeasonWindow, CalendarError> {
        lent_window_in(self.year_number(year)?)
    }

    /// The Christmastide that ends in `year`: December 25 of `year - 1`
    /// through [`christmas_time_end`](Self::christmas_time_end).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn christmas_window(
        &self,
        year: impl Into<YearInput>,
    ) -> Result<SeasonWindow, CalendarError> {
        christmas_window_in(self.year_number(year)?)
    }

    /// The days classified as Advent: the last [`advent_length`](Self::advent_length)
    /// days before Christmas.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for an invalid year argument.
    pub fn advent_window(&self, year: impl Into<YearInput>) -> Result<SeasonWindow, CalendarError> {
        advent_window_in(self.year_number(year)?)
    }

    // --- classification ---

    /// Liturgical time of `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for text that is not a date.
    pub fn year_time(&self, date: impl Into<DateInput>) -> Result<LiturgicalTime, CalendarError> {
        year_time_of(self.resolve_date(date)?)
    }

    /// Week of Ordinary Time containing `date`, or `None` outside Ordinary Time.
    ///
    /// Before Ash Wednesday the week counts up from the end of Christmastide.
    /// From Ash Wednesday on it is the whole weeks between `date` and
    /// Pentecost, in either direction, plus the number of weeks before Lent
    /// plus two. Ordinary days between Eastertide and Pentecost therefore
    /// count down toward Pentecost and the days after it count up again.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for text that is not a date.
    pub fn ordinary_week(&self, date: impl Into<DateInput>) -> Result<Option<u32>, CalendarError> {
        let date = self.resolve_date(date)?;
        if year_time_of(date)? != LiturgicalTime::Ordinary {
            return Ok(None);
        }

        let year = date.year();
        let first = christmas_time_end_in(year)?;
        if date.days_since(first) < i64::from(DAYS_IN_WEEK) {
            return Ok(Some(1));
        }

        let ash = ash_wednesday_in(year)?;
        let week = if date < ash {
            date.days_between(first) / DAYS_IN_WEEK + 1
        } else {
            let before_ash = first.days_between(ash) / DAYS_IN_WEEK + 1;
            let pentecost = pentecost_in(year)?;
            pentecost.days_between(date) / DAYS_IN_WEEK + 2 + before_ash
        };
        trace!("{date} falls in ordinary week {week}");
        Ok(Some(week))
    }
}

fn is_today_keyword(s: &str) -> bool {
    let s = s.trim();
    s.eq_ignore_ascii_case("now") || s.eq_ignore_ascii_case("today")
}

fn date_in(year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
    Ok(CalendarDate::from_ymd(year, month, day)?)
}

fn easter_in(year: i32) -> Result<CalendarDate, CalendarError> {
    gregorian_easter(year).map_err(CalendarError::InvalidYear)
}

/// Holy Saturday; the moveable offsets are counted from the vigil.
fn easter_vigil_in(year: i32) -> Result<CalendarDate, CalendarError> {
    easter_in(year)?.sub_days(1)
}

fn ash_wednesday_in(year: i32) -> Result<CalendarDate, CalendarError> {
    easter_vigil_in(year)?.sub_days(LENT_DURATION)
}

fn ascension_in(year: i32) -> Result<CalendarDate, CalendarError> {
    easter_vigil_in(year)?.add_days(ASCENSION_OFFSET)
}

fn pentecost_in(year: i32) -> Result<CalendarDate, CalendarError> {
    ascension_in(year)?.add_days(PENTECOST_OFFSET)
}

fn advent_sundays_in(year: i32) -> Result<[CalendarDate; ADVENT_SUNDAYS], CalendarError> {
    let christmas_eve = date_in(year, DECEMBER, CHRISTMAS_EVE)?;
    let fourth = christmas_eve.sub_days(christmas_eve.days_from_sunday())?;
    Ok([
        fourth.sub_days(3 * DAYS_IN_WEEK)?,
        fourth.sub_days(2 * DAYS_IN_WEEK)?,
        fourth.sub_days(DAYS_IN_WEEK)?,
        fourth,
    ])
}

fn advent_start_in(year: i32) -> Result<CalendarDate, CalendarError> {
    let [first, ..] = advent_sundays_in(year)?;
    Ok(first)
}

fn advent_length_in(year: i32) -> Result<u32, CalendarError> {
    let reference = date_in(year, DECEMBER, ADVENT_REFERENCE_DAY)?;
    Ok(advent_start_in(year)?.days_between(reference))
}

fn christmas_time_end_in(year: i32) -> Result<CalendarDate, CalendarError> {
    let after_epiphany = date_in(year, JANUARY, AFTER_EPIPHANY)?;
    match after_epiphany.days_from_sunday() {
        0 => Ok(after_epiphany),
        weekday => after_epiphany.add_days(DAYS_IN_WEEK - weekday),
    }
}

fn easter_window_in(year: i32) -> Result<SeasonWindow, CalendarError> {
    SeasonWindow::starting_at(easter_in(year)?, EASTER_DURATION)
}

fn lent_window_in(year: i32) -> Result<SeasonWindow, CalendarError> {
    SeasonWindow::new(ash_wednesday_in(year)?, easter_vigil_in(year)?)
}

fn christmas_window_in(year: i32) -> Result<SeasonWindow, CalendarError> {
    let christmas = date_in(year - 1, DECEMBER, CHRISTMAS_DAY)?;
    SeasonWindow::new(christmas, christmas_time_end_in(year)?)
}

fn advent_window_in(year: i32) -> Result<SeasonWindow, CalendarError> {
    let christmas_eve = date_in(year, DECEMBER, CHRISTMAS_EVE)?;
    SeasonWindow::ending_at(christmas_eve, advent_length_in(year)?.saturating_sub(1))
}

/// Order matters: Eastertide and Lent take precedence over the
/// month-based Christmas and Advent tests.
fn year_time_of(date: CalendarDate) -> Result<LiturgicalTime, CalendarError> {
    let year = date.year();
    let month = date.month();

    let time = if easter_window_in(year)?.contains(date) {
        LiturgicalTime::Easter
    } else if lent_window_in(year)?.contains(date) {
        LiturgicalTime::Lent
    } else if month < MARCH {
        if christmas_window_in(year)?.contains(date) {
            LiturgicalTime::Christmas
        } else {
            LiturgicalTime::Ordinary
        }
    } else if month > SEPTEMBER {
        // The Christmastide ending next year starts on December 25 of this one
        if christmas_window_in(year + 1)?.contains(date) {
            LiturgicalTime::Christmas
        } else if advent_window_in(year)?.contains(date) {
            LiturgicalTime::Advent
        } else {
            LiturgicalTime::Ordinary
        }
    } else {
        LiturgicalTime::Ordinary
    };

    trace!("{date} classified as {time}");
    Ok(time)
}
