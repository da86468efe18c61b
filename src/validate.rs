//! Gregorian calendar checks on normalized fields.
//!
//! The day rules run in a fixed order and short-circuit:
//!
//! 1. year in `MIN_YEAR..=MAX_YEAR`, month in `1..=12`, day in `1..=31`
//! 2. April, June, September and November stop at 30
//! 3. February stops at 29
//! 4. February 29 needs a leap year
//!
//! Every other month keeps the blanket limit of 31 from rule 1.

use crate::CanonicalDate;
use crate::consts::{
    FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, MAX_DAY, MAX_DAY_SHORT_MONTH, MAX_MONTH,
    MAX_YEAR, MIN_DAY, MIN_YEAR, SHORT_MONTHS, UNRECOGNISED_MONTH,
};
use crate::normalize::{MonthSource, NormalizedDate};
use crate::types::{Day, Month, Year, is_leap_year};

/// Reason normalized fields do not form a real date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDate {
    /// A three letter month name that is not a month.
    #[error("unrecognised month name")]
    UnrecognisedMonth,

    #[error("year {0} is outside {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(u16),

    #[error("month {0} is outside 1-{max}", max = MAX_MONTH)]
    MonthOutOfRange(u8),

    #[error("day {0} is outside {min}-{max}", min = MIN_DAY, max = MAX_DAY)]
    DayOutOfRange(u8),

    #[error("month {month} has only {max} days, got {day}", max = MAX_DAY_SHORT_MONTH)]
    DayPastThirty { month: u8, day: u8 },

    #[error("February has at most {max} days, got {0}", max = FEBRUARY_DAYS_LEAP)]
    DayPastFebruary(u8),

    #[error("{year} is not a leap year, February has {max} days", max = FEBRUARY_DAYS)]
    NotLeapYear { year: u16 },
}

/// Checks `date` against the calendar and builds the canonical value.
///
/// # Errors
/// Returns the first [`InvalidDate`] rule the fields break.
pub fn validate(date: &NormalizedDate) -> Result<CanonicalDate, InvalidDate> {
    if date.month_source == MonthSource::Name && date.month == UNRECOGNISED_MONTH {
        return Err(InvalidDate::UnrecognisedMonth);
    }

    let year = Year::new(date.year)?;
    let month = Month::new(date.month)?;
    let day = Day::new(date.day, year, month)?;

    Ok(CanonicalDate::new(year, month, day))
}

/// Day rules for an already range-checked year and month.
///
/// # Errors
/// Returns the [`InvalidDate`] for the first day rule broken.
pub fn check_day(day: u8, year: u16, month: u8) -> Result<(), InvalidDate> {
    if !(MIN_DAY..=MAX_DAY).contains(&day) {
        return Err(InvalidDate::DayOutOfRange(day));
    }
    if SHORT_MONTHS.contains(&month) && day > MAX_DAY_SHORT_MONTH {
        return Err(InvalidDate::DayPastThirty { month, day });
    }
    if month == FEBRUARY && day > FEBRUARY_DAYS_LEAP {
        return Err(InvalidDate::DayPastFebruary(day));
    }
    if month == FEBRUARY && day > FEBRUARY_DAYS && !is_leap_year(year) {
        return Err(InvalidDate::NotLeapYear { year });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(day: u8, month: u8, year: u16) -> NormalizedDate {
        NormalizedDate {
            day,
            month,
            year,
            month_source: MonthSource::Numeric,
        }
    }

    #[test]
    fn test_valid_date() {
        let date = validate(&numeric(30, 4, 2000)).unwrap();
        assert_eq!(date.day(), 30);
        assert_eq!(date.month(), 4);
        assert_eq!(date.year(), 2000);
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(
            validate(&numeric(1, 1, 1752)),
            Err(InvalidDate::YearOutOfRange(1752))
        );
        assert!(validate(&numeric(1, 1, 1753)).is_ok());
        assert!(validate(&numeric(31, 12, 3000)).is_ok());
        assert_eq!(
            validate(&numeric(1, 1, 3001)),
            Err(InvalidDate::YearOutOfRange(3001))
        );
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            validate(&numeric(1, 0, 2000)),
            Err(InvalidDate::MonthOutOfRange(0))
        );
        assert_eq!(
            validate(&numeric(1, 13, 2000)),
            Err(InvalidDate::MonthOutOfRange(13))
        );
    }

    #[test]
    fn test_unrecognised_month_name() {
        let date = NormalizedDate {
            day: 1,
            month: UNRECOGNISED_MONTH,
            year: 2000,
            month_source: MonthSource::Name,
        };
        assert_eq!(validate(&date), Err(InvalidDate::UnrecognisedMonth));
    }

    #[test]
    fn test_day_bounds() {
        assert_eq!(
            validate(&numeric(0, 1, 2000)),
            Err(InvalidDate::DayOutOfRange(0))
        );
        assert_eq!(
            validate(&numeric(32, 1, 2000)),
            Err(InvalidDate::DayOutOfRange(32))
        );
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert!(
                validate(&numeric(31, month, 2001)).is_ok(),
                "month {month} should allow day 31"
            );
        }
    }

    #[test]
    fn test_thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert!(validate(&numeric(30, month, 2000)).is_ok());
            assert_eq!(
                validate(&numeric(31, month, 2000)),
                Err(InvalidDate::DayPastThirty { month, day: 31 })
            );
        }
    }

    #[test]
    fn test_february() {
        assert_eq!(
            validate(&numeric(30, 2, 2000)),
            Err(InvalidDate::DayPastFebruary(30))
        );
        assert!(validate(&numeric(29, 2, 2000)).is_ok());
        assert!(validate(&numeric(29, 2, 2004)).is_ok());
        assert_eq!(
            validate(&numeric(29, 2, 1900)),
            Err(InvalidDate::NotLeapYear { year: 1900 })
        );
        assert!(validate(&numeric(28, 2, 1900)).is_ok());
    }

    #[test]
    fn test_rules_short_circuit_in_order() {
        // Year is checked before the day, so a bad year wins over a bad day
        assert_eq!(
            validate(&numeric(99, 99, 1000)),
            Err(InvalidDate::YearOutOfRange(1000))
        );
        assert_eq!(
            validate(&numeric(99, 99, 2000)),
            Err(InvalidDate::MonthOutOfRange(99))
        );
        assert_eq!(check_day(31, 2001, 2), Err(InvalidDate::DayPastFebruary(31)));
    }
}
