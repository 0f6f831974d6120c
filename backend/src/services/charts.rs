//! Mapping from aggregation results to chart specifications.

use std::collections::BTreeMap;

use crate::api::{
    AggregationResult, AxisValue, ChartKind, ChartSeries, ChartSpec, Column, GroupKey,
    OutputRegion, ReportAggregations,
};
use crate::models::{ReportType, YEAR_MAX, YEAR_MIN};

/// Chart kinds for the four recession charts, in grid order.
pub const RECESSION_CHART_KINDS: [ChartKind; 4] =
    [ChartKind::Line, ChartKind::Bar, ChartKind::Pie, ChartKind::Bar];

/// Chart kinds for the four yearly charts, in grid order.
pub const YEARLY_CHART_KINDS: [ChartKind; 4] =
    [ChartKind::Line, ChartKind::Line, ChartKind::Bar, ChartKind::Pie];

pub fn chart_kinds(report: ReportType) -> [ChartKind; 4] {
    match report {
        ReportType::RecessionPeriod => RECESSION_CHART_KINDS,
        ReportType::Yearly => YEARLY_CHART_KINDS,
    }
}

fn chart_titles(report: ReportType, year: Option<i32>) -> [String; 4] {
    match report {
        ReportType::RecessionPeriod => [
            "Average Automobile Sales During Recession Periods".to_string(),
            "Average Vehicle Sales by Type During Recession".to_string(),
            "Advertising Expenditure Share by Vehicle Type During Recession".to_string(),
            "Effect of Unemployment Rate on Vehicle Sales During Recession".to_string(),
        ],
        ReportType::Yearly => {
            let year = year.map(|y| y.to_string()).unwrap_or_default();
            [
                format!("Average Automobile Sales ({}-{})", YEAR_MIN, YEAR_MAX),
                format!("Total Monthly Automobile Sales in {}", year),
                format!("Average Vehicles Sold by Vehicle Type in {}", year),
                format!("Total Advertisement Expenditure for Each Vehicle in {}", year),
            ]
        }
    }
}

fn axis_value(key: &GroupKey) -> AxisValue {
    match key {
        GroupKey::Year(y) => AxisValue::Number(f64::from(*y)),
        GroupKey::Month(m) => AxisValue::Text(m.to_string()),
        GroupKey::Category(c) => AxisValue::Text(c.clone()),
        GroupKey::RateAndCategory { rate, .. } => AxisValue::Number(*rate),
    }
}

/// Build one chart from an aggregation.
///
/// Two-column groupings become one trace per vehicle type (color split);
/// everything else is a single trace.
pub fn build_chart(kind: ChartKind, title: String, result: &AggregationResult) -> ChartSpec {
    let x = result
        .group_by
        .first()
        .map(|c| c.name().to_string())
        .unwrap_or_default();
    let color_split = result.group_by.len() > 1;

    let series = if color_split {
        let mut traces: BTreeMap<String, ChartSeries> = BTreeMap::new();
        for row in &result.rows {
            let name = row.key.category().unwrap_or_default().to_string();
            let trace = traces.entry(name.clone()).or_insert_with(|| ChartSeries {
                name: Some(name),
                x: Vec::new(),
                y: Vec::new(),
            });
            trace.x.push(axis_value(&row.key));
            trace.y.push(row.value);
        }
        traces.into_values().collect()
    } else {
        vec![ChartSeries {
            name: None,
            x: result.rows.iter().map(|r| axis_value(&r.key)).collect(),
            y: result.rows.iter().map(|r| r.value).collect(),
        }]
    };

    ChartSpec {
        kind,
        title,
        x,
        y: result.value.name().to_string(),
        color: color_split.then(|| Column::VehicleType.name().to_string()),
        series,
    }
}

/// Build the four charts of a report in grid order.
pub fn build_charts(report: &ReportAggregations) -> [ChartSpec; 4] {
    let kinds = chart_kinds(report.report);
    let [t0, t1, t2, t3] = chart_titles(report.report, report.year);
    let [r0, r1, r2, r3] = &report.results;

    [
        build_chart(kinds[0], t0, r0),
        build_chart(kinds[1], t1, r1),
        build_chart(kinds[2], t2, r2),
        build_chart(kinds[3], t3, r3),
    ]
}

/// Lay four charts out as a 2×2 grid.
pub fn grid(charts: [ChartSpec; 4]) -> OutputRegion {
    let [a, b, c, d] = charts;
    OutputRegion::Grid {
        rows: [[a, b], [c, d]],
    }
}
