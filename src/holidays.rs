//! Fixed-date solemnities. The table does not depend on the year.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{CalendarDate, SOLEMNITY, prelude::*};

/// Liturgical rank of a fixed holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    #[display(fmt = "solemnity")]
    Solemnity,
}

impl Rank {
    /// Numeric weight of the rank ([`SOLEMNITY`] for solemnities)
    pub const fn value(self) -> u16 {
        match self {
            Self::Solemnity => SOLEMNITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{name} ({rank})")]
pub struct FixedHoliday {
    pub name: &'static str,
    pub rank: Rank,
}

const fn solemnity(name: &'static str) -> FixedHoliday {
    FixedHoliday {
        name,
        rank: Rank::Solemnity,
    }
}

/// Sorted by `MMDD` code.
static FIXED_HOLIDAYS: [(u16, FixedHoliday); 10] = [
    (101, solemnity("Mary, Mother of God")),
    (106, solemnity("Epiphany")),
    (319, solemnity("Saint Joseph")),
    (325, solemnity("Annunciation of the Lord")),
    (624, solemnity("Birth of Saint John the Baptist")),
    (629, solemnity("Saints Peter and Paul")),
    (815, solemnity("Assumption of the Blessed Virgin Mary")),
    (1101, solemnity("All Saints")),
    (1208, solemnity("Immaculate Conception of the Blessed Virgin Mary")),
    (1225, solemnity("Nativity of the Lord")),
];

/// The fixed solemnities keyed by `MMDD` (1225 is Christmas).
pub fn fixed_holidays() -> BTreeMap<u16, FixedHoliday> {
    FIXED_HOLIDAYS.iter().copied().collect()
}

/// The fixed solemnity falling on `date`, if any.
pub fn fixed_holiday_on(date: CalendarDate) -> Option<FixedHoliday> {
    let code = date.month_day_code();
    FIXED_HOLIDAYS
        .binary_search_by_key(&code, |(key, _)| *key)
        .ok()
        .map(|index| FIXED_HOLIDAYS[index].1)
}
