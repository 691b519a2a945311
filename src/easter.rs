use crate::{CalendarDate, ParseError};

/// Date of Western (Gregorian) Easter Sunday in `year`.
///
/// Uses the anonymous Gregorian computus (Meeus/Jones/Butcher). The result
/// always lies between March 22 and April 25 inclusive (see
/// [`EASTER_MIN`](crate::EASTER_MIN) and [`EASTER_MAX`](crate::EASTER_MAX)).
/// Years before 1583 are computed proleptically.
///
/// # Errors
/// Returns `ParseError::InvalidYear` if chrono cannot represent the year.
pub fn gregorian_easter(year: i32) -> Result<CalendarDate, ParseError> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    // n / 31 is 3 or 4 and n % 31 + 1 is at most 31
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (month, day) = ((n / 31) as u8, (n % 31 + 1) as u8);

    CalendarDate::from_ymd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EASTER_MAX, EASTER_MIN};
    use chrono::Weekday;

    #[test]
    fn test_known_easter_dates() {
        let cases = [
            (1818, 3, 22),
            (1943, 4, 25),
            (2001, 4, 15),
            (2008, 3, 23),
            (2011, 4, 24),
            (2012, 4, 8),
            (2013, 3, 31),
            (2016, 3, 27),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ];

        for (year, month, day) in cases {
            let easter = gregorian_easter(year).unwrap();
            assert_eq!(
                easter,
                CalendarDate::from_ymd(year, month, day).unwrap(),
                "Easter {year}"
            );
        }
    }

    #[test]
    fn test_easter_is_sunday_within_bounds() {
        for year in 1583..=2500 {
            let easter = gregorian_easter(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "Easter {year}");
            let code = easter.month_day_code();
            assert!(
                (EASTER_MIN..=EASTER_MAX).contains(&code),
                "Easter {year} on {easter}"
            );
        }
    }
}
