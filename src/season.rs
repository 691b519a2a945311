use crate::prelude::*;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The liturgical "time" a day belongs to. Exactly one applies to any date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiturgicalTime {
    #[display(fmt = "ORDINARY")]
    Ordinary = 1,
    #[display(fmt = "ADVENT")]
    Advent = 2,
    #[display(fmt = "CHRISTMAS")]
    Christmas = 3,
    #[display(fmt = "LENT")]
    Lent = 4,
    #[display(fmt = "EASTER")]
    Easter = 5,
}

impl LiturgicalTime {
    /// Stable numeric code of this time (Ordinary is 1, Easter is 5)
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Ordinary),
            2 => Some(Self::Advent),
            3 => Some(Self::Christmas),
            4 => Some(Self::Lent),
            5 => Some(Self::Easter),
            _ => None,
        }
    }
}
