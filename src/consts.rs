/// Earliest accepted year (first full year of the Gregorian calendar in Britain)
pub const MIN_YEAR: u16 = 1753;
/// Latest accepted year (inclusive)
pub const MAX_YEAR: u16 = 3000;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Blanket upper bound on the day, applied before any per-month rule
pub const MAX_DAY: u8 = 31;
/// Upper bound on the day for April, June, September and November
pub const MAX_DAY_SHORT_MONTH: u8 = 30;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Months with thirty days
pub const SHORT_MONTHS: [u8; 4] = [4, 6, 9, 11];

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in February for common years
pub const FEBRUARY_DAYS: u8 = 28;

/// Sentinel month value produced by the normalizer for an unknown month name
pub const UNRECOGNISED_MONTH: u8 = 0;

/// Lowercase month abbreviations, indexed by month number minus one
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Title-case month abbreviations used in the canonical output
pub const MONTH_TITLES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Two-digit years below this value land in the 2000s, the rest in the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: u16 = 50;
/// Century added to two-digit years below the pivot
pub const CENTURY_2000: u16 = 2000;
/// Century added to two-digit years at or above the pivot
pub const CENTURY_1900: u16 = 1900;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Field separators accepted between day, month and year
pub const SEPARATORS: [char; 3] = [' ', '-', '/'];

/// Suffix of the diagnostic for a line that does not look like a date
pub const FORMAT_NOT_RECOGNISED: &str = "Format not recognised.";
/// Suffix of the diagnostic for a line that looks like a date but is not one
pub const DATE_NOT_VALID: &str = "Date not valid.";
