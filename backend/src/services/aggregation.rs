//! Query/aggregation engine.
//!
//! Every report is four group-by-then-reduce passes over the shared sales
//! table. Groups are kept in a `BTreeMap`, so results come out ordered by key
//! and repeated calls on the same table return identical values.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::api::{AggregatedRow, AggregationResult, Column, GroupKey, Reducer, ReportAggregations};
use crate::data::SalesTable;
use crate::models::{ReportType, SalesRecord, Selection};

/// Placeholder message when no report type is selected.
pub const SELECT_REPORT_MESSAGE: &str = "Please select a statistic type to begin analysis.";
/// Placeholder message when the yearly report has no year.
pub const SELECT_YEAR_MESSAGE: &str = "Please select a year to view yearly statistics.";

/// Why a selection produced no charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    SelectReport,
    SelectYear,
}

impl Placeholder {
    pub fn message(self) -> &'static str {
        match self {
            Placeholder::SelectReport => SELECT_REPORT_MESSAGE,
            Placeholder::SelectYear => SELECT_YEAR_MESSAGE,
        }
    }
}

/// Outcome of [`compute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Computation {
    /// The selection is incomplete; nothing was aggregated.
    NoOp(Placeholder),
    Ready(ReportAggregations),
}

impl Computation {
    pub fn aggregations(&self) -> Option<&ReportAggregations> {
        match self {
            Computation::Ready(report) => Some(report),
            Computation::NoOp(_) => None,
        }
    }
}

/// How records are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Year,
    Month,
    VehicleType,
    UnemploymentRateAndVehicleType,
}

impl Grouping {
    pub fn columns(self) -> Vec<Column> {
        match self {
            Grouping::Year => vec![Column::Year],
            Grouping::Month => vec![Column::Month],
            Grouping::VehicleType => vec![Column::VehicleType],
            Grouping::UnemploymentRateAndVehicleType => {
                vec![Column::UnemploymentRate, Column::VehicleType]
            }
        }
    }

    pub fn key(self, record: &SalesRecord) -> GroupKey {
        match self {
            Grouping::Year => GroupKey::Year(record.year),
            Grouping::Month => GroupKey::Month(record.month),
            Grouping::VehicleType => GroupKey::Category(record.vehicle_type.clone()),
            // -0.0 + 0.0 == +0.0, so both zeros land in one group
            Grouping::UnemploymentRateAndVehicleType => GroupKey::RateAndCategory {
                rate: record.unemployment_rate + 0.0,
                category: record.vehicle_type.clone(),
            },
        }
    }
}

/// Numeric column being reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    AutomobileSales,
    AdvertisingExpenditure,
}

impl Measure {
    pub fn column(self) -> Column {
        match self {
            Measure::AutomobileSales => Column::AutomobileSales,
            Measure::AdvertisingExpenditure => Column::AdvertisingExpenditure,
        }
    }

    pub fn value(self, record: &SalesRecord) -> f64 {
        match self {
            Measure::AutomobileSales => record.automobile_sales,
            Measure::AdvertisingExpenditure => record.advertising_expenditure,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn finish(self, reducer: Reducer) -> f64 {
        match reducer {
            Reducer::Sum => self.sum,
            Reducer::Mean => self.sum / self.count as f64,
        }
    }
}

/// Group records by `key` and reduce `value` within each group.
///
/// Groups only exist once they hold a record, so a mean never divides by zero.
pub fn group_reduce<'a, I, K, FK, FV>(records: I, key: FK, value: FV, reducer: Reducer) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    K: Ord,
    FK: Fn(&SalesRecord) -> K,
    FV: Fn(&SalesRecord) -> f64,
{
    let mut groups: BTreeMap<K, Accumulator> = BTreeMap::new();
    for record in records {
        let acc = groups.entry(key(record)).or_default();
        acc.sum += value(record);
        acc.count += 1;
    }

    groups
        .into_iter()
        .map(|(k, acc)| (k, acc.finish(reducer)))
        .collect()
}

pub fn group_mean<'a, I, K, FK, FV>(records: I, key: FK, value: FV) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    K: Ord,
    FK: Fn(&SalesRecord) -> K,
    FV: Fn(&SalesRecord) -> f64,
{
    group_reduce(records, key, value, Reducer::Mean)
}

pub fn group_sum<'a, I, K, FK, FV>(records: I, key: FK, value: FV) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    K: Ord,
    FK: Fn(&SalesRecord) -> K,
    FV: Fn(&SalesRecord) -> f64,
{
    group_reduce(records, key, value, Reducer::Sum)
}

/// Run one aggregation and package it as an [`AggregationResult`].
pub fn aggregate<'a, I>(
    records: I,
    grouping: Grouping,
    measure: Measure,
    reducer: Reducer,
) -> AggregationResult
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let rows = group_reduce(records, |r| grouping.key(r), |r| measure.value(r), reducer)
        .into_iter()
        .map(|(key, value)| AggregatedRow { key, value })
        .collect();

    AggregationResult {
        group_by: grouping.columns(),
        value: measure.column(),
        reducer,
        rows,
    }
}

/// Compute the four aggregations for a selection.
///
/// Returns [`Computation::NoOp`] when no report type is selected, or when the
/// yearly report has no year from the selector range.
pub fn compute(table: &SalesTable, selection: &Selection) -> Computation {
    let computation = match selection.report_type {
        None => Computation::NoOp(Placeholder::SelectReport),
        Some(ReportType::RecessionPeriod) => Computation::Ready(recession_report(table)),
        Some(ReportType::Yearly) => match selection.valid_year() {
            Some(year) => Computation::Ready(yearly_report(table, year)),
            None => Computation::NoOp(Placeholder::SelectYear),
        },
    };

    match &computation {
        Computation::Ready(report) => log::debug!(
            "Computed {} aggregations (year={:?}, groups={:?})",
            report.report.slug(),
            report.year,
            report.results.iter().map(|r| r.rows.len()).collect::<Vec<_>>()
        ),
        Computation::NoOp(placeholder) => log::debug!("Selection incomplete: {:?}", placeholder),
    }

    computation
}

/// Recession report: only rows with the recession flag set; the year is ignored.
pub fn recession_report(table: &SalesTable) -> ReportAggregations {
    let rows: Vec<&SalesRecord> = table.recession_records().collect();

    ReportAggregations {
        report: ReportType::RecessionPeriod,
        year: None,
        results: [
            aggregate(rows.iter().copied(), Grouping::Year, Measure::AutomobileSales, Reducer::Mean),
            aggregate(
                rows.iter().copied(),
                Grouping::VehicleType,
                Measure::AutomobileSales,
                Reducer::Mean,
            ),
            aggregate(
                rows.iter().copied(),
                Grouping::VehicleType,
                Measure::AdvertisingExpenditure,
                Reducer::Sum,
            ),
            aggregate(
                rows.iter().copied(),
                Grouping::UnemploymentRateAndVehicleType,
                Measure::AutomobileSales,
                Reducer::Mean,
            ),
        ],
    }
}

/// Yearly report for `year`.
///
/// The first aggregation is the annual trend over the whole table, not the
/// selected year, so the chart shows where that year sits in the full range.
pub fn yearly_report(table: &SalesTable, year: i32) -> ReportAggregations {
    let rows: Vec<&SalesRecord> = table.records_for_year(year).collect();

    ReportAggregations {
        report: ReportType::Yearly,
        year: Some(year),
        results: [
            aggregate(table.records(), Grouping::Year, Measure::AutomobileSales, Reducer::Mean),
            aggregate(rows.iter().copied(), Grouping::Month, Measure::AutomobileSales, Reducer::Sum),
            aggregate(
                rows.iter().copied(),
                Grouping::VehicleType,
                Measure::AutomobileSales,
                Reducer::Mean,
            ),
            aggregate(
                rows.iter().copied(),
                Grouping::VehicleType,
                Measure::AdvertisingExpenditure,
                Reducer::Sum,
            ),
        ],
    }
}
