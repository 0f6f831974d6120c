//! Sales record types.
//!
//! A [`SalesRecord`] is one row of the historical automobile sales table.
//! Records are built once by the loader and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names as they appear in the source CSV header.
pub mod columns {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const VEHICLE_TYPE: &str = "Vehicle_Type";
    pub const AUTOMOBILE_SALES: &str = "Automobile_Sales";
    pub const ADVERTISING_EXPENDITURE: &str = "Advertising_Expenditure";
    pub const UNEMPLOYMENT_RATE: &str = "unemployment_rate";
    pub const RECESSION: &str = "Recession";

    /// Every column the dashboard reads. Other columns in the file are ignored.
    pub const REQUIRED: [&str; 7] = [
        YEAR,
        MONTH,
        VEHICLE_TYPE,
        AUTOMOBILE_SALES,
        ADVERTISING_EXPENDITURE,
        UNEMPLOYMENT_RATE,
        RECESSION,
    ];
}

/// Calendar month.
///
/// Ordering follows the calendar, so grouping by month yields January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Three-letter abbreviation used by the source data.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Error returned when a month name cannot be recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown month '{0}'")]
pub struct ParseMonthError(pub String);

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Accepts abbreviations (`Jan`) and full names (`January`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        Month::ALL
            .iter()
            .copied()
            .find(|m| lower == m.abbreviation().to_ascii_lowercase() || lower == full_name(*m))
            .ok_or_else(|| ParseMonthError(trimmed.to_string()))
    }
}

fn full_name(month: Month) -> &'static str {
    match month {
        Month::Jan => "january",
        Month::Feb => "february",
        Month::Mar => "march",
        Month::Apr => "april",
        Month::May => "may",
        Month::Jun => "june",
        Month::Jul => "july",
        Month::Aug => "august",
        Month::Sep => "september",
        Month::Oct => "october",
        Month::Nov => "november",
        Month::Dec => "december",
    }
}

/// One row of the sales table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub year: i32,
    pub month: Month,
    pub vehicle_type: String,
    pub automobile_sales: f64,
    pub advertising_expenditure: f64,
    pub unemployment_rate: f64,
    /// Whether the record falls inside a designated recession period.
    pub recession: bool,
}
