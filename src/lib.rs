//! Canonicalizes loosely formatted dates, one line at a time.
//!
//! A line is accepted when it reads `day <sep> month <sep> year` with the same
//! separator (space, hyphen or slash) both times, and the fields name a real
//! Gregorian date between 1753 and 3000. Accepted lines are rendered as
//! `dd Mon yyyy`; everything else gets a diagnostic naming the original line.

mod consts;
pub mod logging;
pub mod normalize;
mod prelude;
mod process;
pub mod shape;
mod types;
pub mod validate;

pub use consts::*;
pub use normalize::{MonthSource, NormalizedDate, normalize};
pub use process::{Summary, process_lines};
pub use shape::{RawFields, Separator, ShapeError, match_shape};
pub use types::{Day, Month, Year, is_leap_year};
pub use validate::{InvalidDate, validate};

use crate::prelude::*;
use std::str::FromStr;

/// A date that passed every calendar check, rendered as `dd Mon yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{} {} {}", day, month, year)]
pub struct CanonicalDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Why a line was rejected. Displays as the fixed diagnostic suffix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line does not have the shape of a date.
    #[error("{msg}", msg = FORMAT_NOT_RECOGNISED)]
    FormatNotRecognised(#[from] ShapeError),

    /// The line has the shape of a date but is not a real one.
    #[error("{msg}", msg = DATE_NOT_VALID)]
    DateNotValid(#[from] InvalidDate),
}

impl LineError {
    /// Full diagnostic for `line`, e.g. `32/1/2000 - Date not valid.`
    pub fn diagnostic(&self, line: &str) -> String {
        format!("{line} - {self}")
    }

    /// The underlying reason, for logging.
    pub fn reason(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Self::FormatNotRecognised(err) => err,
            Self::DateNotValid(err) => err,
        }
    }
}

impl CanonicalDate {
    /// Assembles a date from components that were validated together.
    pub(crate) const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from plain integers, applying the calendar checks.
    ///
    /// # Errors
    /// Returns the first [`InvalidDate`] rule the values break.
    pub fn from_parts(day: u8, month: u8, year: u16) -> Result<Self, InvalidDate> {
        validate(&NormalizedDate {
            day,
            month,
            year,
            month_source: MonthSource::Numeric,
        })
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month number (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the four digit year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }
}

/// Runs one line through shape matching, normalization and validation.
///
/// # Errors
/// Returns [`LineError::FormatNotRecognised`] if the line is not shaped like a
/// date, or [`LineError::DateNotValid`] if it is but names no real day.
pub fn reformat(line: &str) -> Result<CanonicalDate, LineError> {
    let fields = match_shape(line)?;
    let normalized = normalize(&fields);
    validate(&normalized).map_err(LineError::DateNotValid)
}

impl FromStr for CanonicalDate {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        reformat(s)
    }
}

impl serde::Serialize for CanonicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
