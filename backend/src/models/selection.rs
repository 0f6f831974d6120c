//! Report selection types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First year offered by the year selector.
pub const YEAR_MIN: i32 = 1980;
/// Last year offered by the year selector.
pub const YEAR_MAX: i32 = 2023;

/// Years offered by the year selector, ascending.
pub fn year_options() -> Vec<i32> {
    (YEAR_MIN..=YEAR_MAX).collect()
}

/// Top-level report type.
///
/// Serialized with the labels shown in the report selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Yearly Statistics", alias = "yearly")]
    Yearly,
    #[serde(rename = "Recession Period Statistics", alias = "recession")]
    RecessionPeriod,
}

impl ReportType {
    pub const ALL: [ReportType; 2] = [ReportType::Yearly, ReportType::RecessionPeriod];

    pub fn label(self) -> &'static str {
        match self {
            ReportType::Yearly => "Yearly Statistics",
            ReportType::RecessionPeriod => "Recession Period Statistics",
        }
    }

    /// Short machine-friendly name used in query strings.
    pub fn slug(self) -> &'static str {
        match self {
            ReportType::Yearly => "yearly",
            ReportType::RecessionPeriod => "recession",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown report type '{0}'. Use 'yearly' or 'recession'.")]
pub struct ParseReportTypeError(pub String);

impl FromStr for ReportType {
    type Err = ParseReportTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ReportType::ALL
            .iter()
            .copied()
            .find(|r| {
                trimmed.eq_ignore_ascii_case(r.slug()) || trimmed.eq_ignore_ascii_case(r.label())
            })
            .ok_or_else(|| ParseReportTypeError(trimmed.to_string()))
    }
}

/// The pair of selector values that drives which aggregations run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub report_type: Option<ReportType>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl Selection {
    pub fn new(report_type: Option<ReportType>, year: Option<i32>) -> Self {
        Self { report_type, year }
    }

    pub fn yearly(year: i32) -> Self {
        Self::new(Some(ReportType::Yearly), Some(year))
    }

    pub fn recession() -> Self {
        Self::new(Some(ReportType::RecessionPeriod), None)
    }

    /// The selected year, if it is one the selector offers.
    pub fn valid_year(&self) -> Option<i32> {
        self.year.filter(|y| (YEAR_MIN..=YEAR_MAX).contains(y))
    }
}
