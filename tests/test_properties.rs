//! Invariants that hold for every Gregorian year.

use chrono::Weekday;
use liturgical_calendar::{
    CalendarDate, EASTER_MAX, EASTER_MIN, FixedClock, LiturgicalCalendar, LiturgicalTime,
};
use proptest::prelude::*;

fn calendar() -> LiturgicalCalendar<FixedClock> {
    let today = CalendarDate::from_ymd(2013, 7, 19).unwrap();
    LiturgicalCalendar::with_clock(FixedClock::new(today))
}

proptest! {
    #[test]
    fn easter_is_a_sunday_between_march_22_and_april_25(year in 1583_i32..=4099) {
        let easter = calendar().easter_date(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!((EASTER_MIN..=EASTER_MAX).contains(&easter.month_day_code()));
    }

    #[test]
    fn advent_has_four_sundays_a_week_apart(year in 1583_i32..=4099) {
        let sundays = calendar().advent_sundays(year).unwrap();
        prop_assert_eq!(sundays.len(), 4);
        for pair in sundays.windows(2) {
            prop_assert_eq!(pair[1].days_since(pair[0]), 7);
        }
        let last = sundays[3];
        prop_assert_eq!(last.weekday(), Weekday::Sun);
        prop_assert_eq!(last.month(), 12);
        prop_assert!(last.day() <= 24);
    }

    #[test]
    fn christmastide_ends_on_a_sunday_after_epiphany(year in 1583_i32..=4099) {
        let end = calendar().christmas_time_end(year).unwrap();
        prop_assert_eq!(end.weekday(), Weekday::Sun);
        prop_assert_eq!(end.month(), 1);
        prop_assert!((7..=13).contains(&end.day()));
    }

    #[test]
    fn moveable_feasts_fall_on_their_weekdays(year in 1583_i32..=4099) {
        let cal = calendar();
        prop_assert_eq!(cal.ash_wednesday(year).unwrap().weekday(), Weekday::Wed);
        prop_assert_eq!(cal.ascension(year).unwrap().weekday(), Weekday::Sun);
        prop_assert_eq!(cal.pentecost(year).unwrap().weekday(), Weekday::Sun);
    }

    #[test]
    fn getters_are_idempotent(year in 1583_i32..=4099) {
        let cal = calendar();
        prop_assert_eq!(cal.easter_date(year).unwrap(), cal.easter_date(year).unwrap());
        prop_assert_eq!(cal.advent_sundays(year).unwrap(), cal.advent_sundays(year).unwrap());
        prop_assert_eq!(
            cal.christmas_time_length(year).unwrap(),
            cal.christmas_time_length(year).unwrap()
        );
    }

    #[test]
    fn season_windows_never_overlap(year in 1584_i32..=4099) {
        let cal = calendar();
        let windows = [
            cal.christmas_window(year).unwrap(),
            cal.lent_window(year).unwrap(),
            cal.easter_window(year).unwrap(),
            cal.advent_window(year).unwrap(),
        ];
        for (i, a) in windows.iter().enumerate() {
            for b in &windows[i + 1..] {
                prop_assert!(!a.overlaps(b), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn ordinary_week_only_in_ordinary_time(year in 1584_i32..=4099, ordinal in 1_u32..=365) {
        let cal = calendar();
        let day = CalendarDate::from_ymd(year, 1, 1).unwrap().add_days(ordinal - 1).unwrap();
        let time = cal.year_time(day).unwrap();
        let week = cal.ordinary_week(day).unwrap();
        prop_assert_eq!(week.is_some(), time == LiturgicalTime::Ordinary);
        if let Some(week) = week {
            prop_assert!(week >= 1);
        }
    }
}
