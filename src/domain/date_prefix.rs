//! Date prefix calculation (`YYWWD` / `YYYYWWD`)

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many digits of the year go into the prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum YearFormat {
    /// `25` for 2025
    #[default]
    #[serde(rename = "2")]
    Two,
    /// `2025`
    #[serde(rename = "4")]
    Four,
}

impl FromStr for YearFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(YearFormat::Two),
            "4" => Ok(YearFormat::Four),
            _ => Err(format!(
                "Invalid year format: '{}'. Valid formats are: 2, 4",
                s
            )),
        }
    }
}

impl fmt::Display for YearFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFormat::Two => f.write_str("2"),
            YearFormat::Four => f.write_str("4"),
        }
    }
}

/// The date-derived leading part of a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatePrefix(String);

impl DatePrefix {
    /// Compute the prefix for an instant, read in UTC.
    pub fn compute(instant: DateTime<Utc>, year_format: YearFormat) -> Self {
        Self::for_date(instant.date_naive(), year_format)
    }

    /// Compute the prefix for a calendar date.
    ///
    /// The week and the year both come from the Thursday of the date's
    /// ISO week, so dates near New Year carry the ISO week-year.
    pub fn for_date(date: NaiveDate, year_format: YearFormat) -> Self {
        let weekday = date.weekday().number_from_monday();
        let thursday = date + Duration::days(4 - i64::from(weekday));
        let week = thursday.ordinal0() / 7 + 1;

        let year = match year_format {
            YearFormat::Two => format!("{:02}", thursday.year().rem_euclid(100)),
            YearFormat::Four => format!("{:04}", thursday.year()),
        };

        DatePrefix(format!("{}{:02}{}", year, week, weekday))
    }

    /// Wrap a prefix that was parsed out of an existing tag
    pub(crate) fn from_digits(digits: &str) -> Self {
        DatePrefix(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
