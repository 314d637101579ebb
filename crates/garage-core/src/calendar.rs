//! Calendar arithmetic shared by the reports.
//!
//! Reports walk a closed range of calendar units one step at a time. Days are
//! plain [`jiff::civil::Date`] values; months are [`YearMonth`] values. Both
//! implement [`CalendarUnit`], so a single [`Units`] iterator enumerates
//! either granularity.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{GarageError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Every month from `start` through `end`, ascending. Empty when `start` is
/// after `end`.
pub fn months_in_range(start: YearMonth, end: YearMonth) -> Vec<YearMonth> {
    Units::new(start, end).collect()
}

/// Parses a `YYYY-MM-DD` calendar date supplied for `field`.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    Date::strptime(DATE_FORMAT, value.trim())
        .map_err(|_| GarageError::invalid_format(field, value, "YYYY-MM-DD"))
}

/// A unit of calendar time with a well-defined successor.
pub trait CalendarUnit: Copy + Ord {
    /// The unit immediately after this one, or `None` at the end of the
    /// supported calendar.
    fn succ(self) -> Option<Self>;
}

impl CalendarUnit for Date {
    fn succ(self) -> Option<Self> {
        self.tomorrow().ok()
    }
}

impl CalendarUnit for YearMonth {
    fn succ(self) -> Option<Self> {
        self.next()
    }
}

/// Inclusive iterator over consecutive calendar units.
#[derive(Debug, Clone)]
pub struct Units<U> {
    next: Option<U>,
    end: U,
}

impl<U: CalendarUnit> Units<U> {
    /// Iterates from `start` through `end`; yields nothing if `start > end`.
    pub fn new(start: U, end: U) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }
}

impl<U: CalendarUnit> Iterator for Units<U> {
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let current = self.next.filter(|unit| *unit <= self.end)?;
        self.next = current.succ();
        Some(current)
    }
}

/// A calendar month of a specific year.
///
/// Ordering compares the year first, then the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i16,
    month: i8,
}

impl YearMonth {
    /// Creates a year-month, rejecting months outside 1..=12 and years
    /// outside 0..=9999.
    pub fn new(year: i16, month: i8) -> Result<Self> {
        if !(0..=9999).contains(&year) {
            return Err(GarageError::invalid_input("year")
                .with_reason(format!("{year} is outside 0..=9999")));
        }
        if !(1..=12).contains(&month) {
            return Err(GarageError::invalid_input("month")
                .with_reason(format!("{month} is outside 1..=12")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses `value` as `YYYY-MM`, reporting failures against `field`.
    pub fn parse_field(field: &str, value: &str) -> Result<Self> {
        let invalid = || GarageError::invalid_format(field, value, "YYYY-MM");
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;

        if year.len() != 4 || !(1..=2).contains(&month.len()) {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i16 = year.parse().map_err(|_| invalid())?;
        let month: i8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    /// Month number, 1 through 12.
    pub fn month(&self) -> i8 {
        self.month
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn days_in_month(&self) -> i8 {
        days_in_month(self.year, self.month)
    }

    /// First day of the month.
    pub fn first_day(&self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    /// Last day of the month.
    pub fn last_day(&self) -> Date {
        jiff::civil::date(self.year, self.month, self.days_in_month())
    }

    /// The following month, rolling December into January of the next year.
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year.checked_add(1)?, 1).ok()
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }
}

impl FromStr for YearMonth {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_field("yearMonth", s)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
