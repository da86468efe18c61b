//! Lexical matching of a line against `day <sep> month <sep> year`.
//!
//! Only the shape of each token is checked here: digit counts, the three
//! accepted month-name casings and the separator. Whether the numbers make a
//! real date is decided later by the validator.

use crate::consts::SEPARATORS;
use crate::prelude::*;

/// Character separating the three fields of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Separator {
    #[display(fmt = " ")]
    Space,
    #[display(fmt = "-")]
    Hyphen,
    #[display(fmt = "/")]
    Slash,
}

impl Separator {
    /// Maps a character onto a separator, if it is one.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Space),
            '-' => Some(Self::Hyphen),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Hyphen => '-',
            Self::Slash => '/',
        }
    }
}

/// The three raw tokens of a line that has the shape of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub separator: Separator,
}

/// Reason a line does not have the shape of a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("empty line")]
    Empty,

    #[error("no field separator found")]
    MissingSeparator,

    /// The tail after the day did not split into exactly month and year.
    #[error("expected 3 fields separated by {separator:?}, found {found}")]
    FieldCount { separator: char, found: usize },

    /// Both separators are valid on their own but differ from each other.
    #[error("mixed separators {first:?} and {second:?}")]
    MixedSeparators { first: char, second: char },

    #[error("day {0:?} is not 1 or 2 digits")]
    Day(String),

    #[error("month {0:?} is neither 1-2 digits nor a 3 letter name")]
    Month(String),

    /// Three letters, but not all-lower, all-upper or title case.
    #[error("month name {0:?} has mixed casing")]
    MonthCasing(String),

    #[error("year {0:?} is not 2 or 4 digits")]
    Year(String),
}

/// Splits `line` into day, month and year, requiring the whole line to match.
///
/// # Errors
/// Returns a [`ShapeError`] describing the first lexical rule the line breaks.
pub fn match_shape(line: &str) -> Result<RawFields<'_>, ShapeError> {
    if line.is_empty() {
        return Err(ShapeError::Empty);
    }

    let (sep_at, sep_char) = line
        .char_indices()
        .find(|&(_, c)| SEPARATORS.contains(&c))
        .ok_or(ShapeError::MissingSeparator)?;
    let separator = Separator::from_char(sep_char).ok_or(ShapeError::MissingSeparator)?;

    let day = &line[..sep_at];
    let rest = &line[sep_at + sep_char.len_utf8()..];

    let parts: Vec<&str> = rest.split(sep_char).collect();
    let [month, year] = parts[..] else {
        if let Some(second) = rest.chars().find(|c| *c != sep_char && SEPARATORS.contains(c)) {
            return Err(ShapeError::MixedSeparators {
                first: sep_char,
                second,
            });
        }
        return Err(ShapeError::FieldCount {
            separator: sep_char,
            found: parts.len() + 1,
        });
    };

    if !is_digits(day, 1, 2) {
        return Err(ShapeError::Day(day.to_owned()));
    }
    check_month(month)?;
    if !(is_digits(year, 2, 2) || is_digits(year, 4, 4)) {
        return Err(ShapeError::Year(year.to_owned()));
    }

    Ok(RawFields {
        day,
        month,
        year,
        separator,
    })
}

/// True when `text` is between `min` and `max` ASCII digits long.
fn is_digits(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}

fn check_month(month: &str) -> Result<(), ShapeError> {
    if is_digits(month, 1, 2) {
        return Ok(());
    }

    let bytes = month.as_bytes();
    let [first, rest @ ..] = bytes else {
        return Err(ShapeError::Month(month.to_owned()));
    };
    if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return Err(ShapeError::Month(month.to_owned()));
    }

    let lower = bytes.iter().all(u8::is_ascii_lowercase);
    let upper = bytes.iter().all(u8::is_ascii_uppercase);
    let title = first.is_ascii_uppercase() && rest.iter().all(u8::is_ascii_lowercase);
    if lower || upper || title {
        Ok(())
    } else {
        Err(ShapeError::MonthCasing(month.to_owned()))
    }
}
