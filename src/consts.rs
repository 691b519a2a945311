/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Separates hours from minutes; its presence marks a timestamp
pub const TIME_SEPARATOR: char = ':';

pub const DAYS_IN_WEEK: u32 = 7;

/// Earliest possible Easter Sunday, as `MMDD` (March 22)
pub const EASTER_MIN: u16 = 322;
/// Latest possible Easter Sunday, as `MMDD` (April 25)
pub const EASTER_MAX: u16 = 425;

/// Days of Eastertide counted after Easter Sunday
pub const EASTER_DURATION: u32 = 40;
/// Days from Ash Wednesday to the Easter vigil
pub const LENT_DURATION: u32 = 45;
/// Days from the Easter vigil to Ascension Sunday
pub const ASCENSION_OFFSET: u32 = 43;
/// Days from Ascension Sunday to Pentecost
pub const PENTECOST_OFFSET: u32 = 7;

/// Number of Sundays of Advent
pub const ADVENT_SUNDAYS: usize = 4;

/// Christmas Day
pub const CHRISTMAS_DAY: u8 = 25;
/// Christmas Eve, on or before which the fourth Sunday of Advent falls
pub const CHRISTMAS_EVE: u8 = 24;
/// Reference day in December that fixes the width of the Advent window
pub const ADVENT_REFERENCE_DAY: u8 = 15;
/// Day after Epiphany, from which the end of Christmastide is found
pub const AFTER_EPIPHANY: u8 = 7;

/// Rank value of a solemnity
pub const SOLEMNITY: u16 = 200;
