//! Concrete dates from the liturgical years 2012-2013 and 2013-2014.

use chrono::Weekday;
use liturgical_calendar::{
    CalendarDate, CalendarError, FixedClock, LiturgicalCalendar, LiturgicalTime, fixed_holiday_on,
    fixed_holidays,
};

fn date(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

fn calendar() -> LiturgicalCalendar<FixedClock> {
    LiturgicalCalendar::with_clock(FixedClock::new(date(2013, 7, 19)))
}

#[test]
fn year_time_across_a_liturgical_year() {
    let cal = calendar();
    let expected = [
        ("2012-12-20", LiturgicalTime::Advent),
        ("2012-12-25", LiturgicalTime::Christmas),
        ("2012-12-30", LiturgicalTime::Christmas),
        ("2013-01-13", LiturgicalTime::Christmas),
        ("2013-01-14", LiturgicalTime::Ordinary),
        ("2013-02-13", LiturgicalTime::Lent),
        ("2013-03-31", LiturgicalTime::Easter),
        ("2013-07-19", LiturgicalTime::Ordinary),
    ];
    for (input, time) in expected {
        assert_eq!(cal.year_time(input).unwrap(), time, "{input}");
    }
}

#[test]
fn year_time_accepts_every_input_form() {
    let cal = calendar();
    let christmas = date(2012, 12, 25);
    assert_eq!(cal.year_time(christmas).unwrap(), LiturgicalTime::Christmas);
    assert_eq!(
        cal.year_time(chrono::NaiveDate::from(christmas)).unwrap(),
        LiturgicalTime::Christmas
    );
    assert_eq!(
        cal.year_time("12/25/2012").unwrap(),
        LiturgicalTime::Christmas
    );
    assert_eq!(
        cal.year_time(String::from("2012-12-25T08:00:00Z")).unwrap(),
        LiturgicalTime::Christmas
    );
}

#[test]
fn moveable_feasts_2013() {
    let cal = calendar();
    assert_eq!(cal.easter_date(2013).unwrap(), date(2013, 3, 31));
    assert_eq!(cal.ash_wednesday(2013).unwrap(), date(2013, 2, 13));
    assert_eq!(cal.ascension(2013).unwrap(), date(2013, 5, 12));
    assert_eq!(cal.pentecost(2013).unwrap(), date(2013, 5, 19));
}

#[test]
fn ash_wednesday_of_the_current_year_is_a_wednesday() {
    let cal = LiturgicalCalendar::new();
    assert_eq!(
        cal.ash_wednesday(None::<i32>).unwrap().weekday(),
        Weekday::Wed
    );
}

#[test]
fn advent_2012() {
    let cal = calendar();
    assert_eq!(
        cal.advent_sundays(2012).unwrap(),
        [
            date(2012, 12, 2),
            date(2012, 12, 9),
            date(2012, 12, 16),
            date(2012, 12, 23)
        ]
    );
    assert_eq!(cal.advent_start(2012).unwrap(), date(2012, 12, 2));
    assert_eq!(cal.year_start("2012").unwrap(), date(2012, 12, 2));
}

#[test]
fn ordinary_weeks_2013() {
    let cal = calendar();
    assert_eq!(cal.ordinary_week(date(2013, 1, 30)).unwrap(), Some(3));
    assert_eq!(cal.ordinary_week(date(2013, 2, 11)).unwrap(), Some(5));
    assert_eq!(cal.ordinary_week(date(2013, 5, 21)).unwrap(), Some(7));
    assert_eq!(cal.ordinary_week(date(2013, 2, 20)).unwrap(), None);
    assert_eq!(cal.ordinary_week(date(2013, 12, 25)).unwrap(), None);
}

#[test]
fn fixed_solemnities() {
    let holidays = fixed_holidays();
    assert_eq!(holidays.len(), 10);
    assert_eq!(holidays[&106].name, "Epiphany");
    assert_eq!(holidays[&815].rank.value(), 200);

    let immaculate = fixed_holiday_on(date(2013, 12, 8)).unwrap();
    assert_eq!(
        immaculate.name,
        "Immaculate Conception of the Blessed Virgin Mary"
    );
}

#[test]
fn invalid_arguments_propagate() {
    let cal = calendar();
    assert!(matches!(
        cal.pentecost("soon"),
        Err(CalendarError::InvalidYear(_))
    ));
    assert!(matches!(
        cal.ordinary_week("2013-13-01"),
        Err(CalendarError::InvalidDate(_))
    ));
}
