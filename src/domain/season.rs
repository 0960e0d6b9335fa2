//! Seasonal rules: the youth privatization window of the parterre

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A day of the year, independent of the year itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Result<Self, DomainError> {
        // 2000 is a leap year, so Feb 29 is accepted.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(DomainError::InvalidMonthDay(format!("{month:02}-{day:02}")));
        }
        Ok(Self { month, day })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidMonthDay(s.to_string());
        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        MonthDay::new(month, day).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// Period during which the front parterre rows are handed to the youth program.
///
/// `start` is inclusive, `end` exclusive. A window whose start lies after its
/// end wraps around the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouthWindow {
    pub start: MonthDay,
    pub end: MonthDay,
    /// Leading parterre rows withheld while the window is open.
    pub excluded_rows: usize,
}

impl Default for YouthWindow {
    fn default() -> Self {
        Self {
            start: MonthDay { month: 6, day: 21 },
            end: MonthDay { month: 9, day: 21 },
            excluded_rows: 3,
        }
    }
}

impl YouthWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let today = MonthDay::of(date);
        if self.start <= self.end {
            self.start <= today && today < self.end
        } else {
            today >= self.start || today < self.end
        }
    }

    /// Rows to withhold on `date`.
    pub fn excluded_rows_on(&self, date: NaiveDate) -> usize {
        if self.contains(date) {
            self.excluded_rows
        } else {
            0
        }
    }
}
