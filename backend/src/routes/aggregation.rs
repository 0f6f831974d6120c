use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{columns, Month, ReportType};

// =========================================================
// Aggregation types + route
// =========================================================

/// Route path for raw aggregation results.
pub const AGGREGATIONS_PATH: &str = "/aggregations";

/// Columns the aggregation engine can group on or reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Year")]
    Year,
    #[serde(rename = "Month")]
    Month,
    #[serde(rename = "Vehicle_Type")]
    VehicleType,
    #[serde(rename = "Automobile_Sales")]
    AutomobileSales,
    #[serde(rename = "Advertising_Expenditure")]
    AdvertisingExpenditure,
    #[serde(rename = "unemployment_rate")]
    UnemploymentRate,
}

impl Column {
    /// Header name in the source CSV.
    pub fn name(self) -> &'static str {
        match self {
            Column::Year => columns::YEAR,
            Column::Month => columns::MONTH,
            Column::VehicleType => columns::VEHICLE_TYPE,
            Column::AutomobileSales => columns::AUTOMOBILE_SALES,
            Column::AdvertisingExpenditure => columns::ADVERTISING_EXPENDITURE,
            Column::UnemploymentRate => columns::UNEMPLOYMENT_RATE,
        }
    }
}

/// Reduction applied to each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    Mean,
    Sum,
}

/// Key identifying one group of an aggregation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Year(i32),
    Month(Month),
    Category(String),
    RateAndCategory { rate: f64, category: String },
}

impl GroupKey {
    fn rank(&self) -> u8 {
        match self {
            GroupKey::Year(_) => 0,
            GroupKey::Month(_) => 1,
            GroupKey::Category(_) => 2,
            GroupKey::RateAndCategory { .. } => 3,
        }
    }

    /// The vehicle type carried by the key, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            GroupKey::Category(c) | GroupKey::RateAndCategory { category: c, .. } => Some(c),
            _ => None,
        }
    }
}

// Rates compare with `total_cmp` so keys have a total order.
impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (GroupKey::Year(a), GroupKey::Year(b)) => a.cmp(b),
            (GroupKey::Month(a), GroupKey::Month(b)) => a.cmp(b),
            (GroupKey::Category(a), GroupKey::Category(b)) => a.cmp(b),
            (
                GroupKey::RateAndCategory { rate: ra, category: ca },
                GroupKey::RateAndCategory { rate: rb, category: cb },
            ) => ra.total_cmp(rb).then_with(|| ca.cmp(cb)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

/// One (group key, reduced value) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub key: GroupKey,
    pub value: f64,
}

/// Ordered result of a group-by-then-reduce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub group_by: Vec<Column>,
    pub value: Column,
    pub reducer: Reducer,
    /// Rows sorted by key
    pub rows: Vec<AggregatedRow>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the reduced value for a key.
    pub fn value_for(&self, key: &GroupKey) -> Option<f64> {
        self.rows.iter().find(|r| &r.key == key).map(|r| r.value)
    }
}

/// The four aggregations backing one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportAggregations {
    pub report: ReportType,
    /// Selected year (yearly report only)
    pub year: Option<i32>,
    pub results: [AggregationResult; 4],
}
