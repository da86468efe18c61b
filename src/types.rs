use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
    MONTH_ABBREVIATIONS, MONTH_TITLES,
};
use crate::validate::{InvalidDate, check_day};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1753..=3000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `InvalidDate::YearOutOfRange` if the value is outside the range.
    pub fn new(value: u16) -> Result<Self, InvalidDate> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(InvalidDate::YearOutOfRange(value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(InvalidDate::YearOutOfRange(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidDate;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidDate::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidDate> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDate::MonthOutOfRange(value))?;
        if value > MAX_MONTH {
            return Err(InvalidDate::MonthOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    /// Looks up a three letter English abbreviation, ignoring case
    pub fn from_abbreviation(name: &str) -> Option<Self> {
        let folded = name.to_ascii_lowercase();
        let index = MONTH_ABBREVIATIONS
            .iter()
            .position(|abbr| *abbr == folded)?;
        u8::try_from(index + 1)
            .ok()
            .and_then(|number| Self::new(number).ok())
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Title-case abbreviation, e.g. `Jan`
    pub const fn abbreviation(self) -> &'static str {
        MONTH_TITLES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDate;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the year and month
    ///
    /// # Errors
    /// Returns the `InvalidDate` for the first day rule the value breaks.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, InvalidDate> {
        check_day(value, year.get(), month.get())?;
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(InvalidDate::DayOutOfRange(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && !(year % CENTURY_CYCLE == 0 && year % GREGORIAN_CYCLE != 0)
}
