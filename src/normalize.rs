//! Conversion of raw date tokens into integers.

use crate::consts::{CENTURY_1900, CENTURY_2000, TWO_DIGIT_YEAR_PIVOT, UNRECOGNISED_MONTH};
use crate::shape::RawFields;
use crate::types::Month;

/// How the month field was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthSource {
    Numeric,
    Name,
}

/// Integer date fields that have not yet been checked against the calendar.
///
/// `month` is [`UNRECOGNISED_MONTH`] when a name did not match any month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    pub month_source: MonthSource,
}

/// Turns matched tokens into integers, expanding two-digit years.
pub fn normalize(fields: &RawFields<'_>) -> NormalizedDate {
    let (month, month_source) = if is_numeric(fields.month) {
        (digits_u8(fields.month), MonthSource::Numeric)
    } else {
        let month = Month::from_abbreviation(fields.month).map_or(UNRECOGNISED_MONTH, Month::get);
        (month, MonthSource::Name)
    };

    NormalizedDate {
        day: digits_u8(fields.day),
        month,
        year: expand_year(fields.year),
        month_source,
    }
}

/// Windowing depends on how many digits were written, so "0012" stays year 12.
fn expand_year(text: &str) -> u16 {
    let value = digits_u16(text);
    if text.len() != 2 {
        value
    } else if value < TWO_DIGIT_YEAR_PIVOT {
        CENTURY_2000 + value
    } else {
        CENTURY_1900 + value
    }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

// Callers only pass tokens the shape matcher has already bounded in length,
// so saturation never kicks in.
fn digits_u8(text: &str) -> u8 {
    text.bytes().fold(0, |acc: u8, b| {
        acc.saturating_mul(10).saturating_add(b.wrapping_sub(b'0'))
    })
}

fn digits_u16(text: &str) -> u16 {
    text.bytes().fold(0, |acc: u16, b| {
        acc.saturating_mul(10)
            .saturating_add(u16::from(b.wrapping_sub(b'0')))
    })
}
