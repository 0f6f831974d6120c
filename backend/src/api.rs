//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types exchanged with the browser.
//! All response types derive Serialize for JSON serialization.

pub use crate::routes::aggregation::AggregatedRow;
pub use crate::routes::aggregation::AggregationResult;
pub use crate::routes::aggregation::Column;
pub use crate::routes::aggregation::GroupKey;
pub use crate::routes::aggregation::Reducer;
pub use crate::routes::aggregation::ReportAggregations;
pub use crate::routes::aggregation::AGGREGATIONS_PATH;
pub use crate::routes::dashboard::AxisValue;
pub use crate::routes::dashboard::ChartKind;
pub use crate::routes::dashboard::ChartSeries;
pub use crate::routes::dashboard::ChartSpec;
pub use crate::routes::dashboard::DashboardState;
pub use crate::routes::dashboard::DashboardView;
pub use crate::routes::dashboard::EventRequest;
pub use crate::routes::dashboard::EventResponse;
pub use crate::routes::dashboard::InputEvent;
pub use crate::routes::dashboard::InputId;
pub use crate::routes::dashboard::OutputRegion;
pub use crate::routes::dashboard::SelectOption;
pub use crate::routes::dashboard::SelectorView;
pub use crate::routes::dashboard::DASHBOARD_EVENTS_PATH;
pub use crate::routes::dashboard::DASHBOARD_PATH;
pub use crate::routes::dashboard::DASHBOARD_TITLE;
pub use crate::routes::dashboard::OPTIONS_PATH;
pub use crate::routes::dashboard::REPORT_SELECTOR_ID;
pub use crate::routes::dashboard::YEAR_SELECTOR_ID;

pub use crate::models::{ReportType, SalesRecord, Selection};
