//! Data Transfer Objects for the HTTP API.
//!
//! Dashboard view types are re-exported from the routes module since they
//! already derive Serialize/Deserialize; this module adds the request and
//! response envelopes that only exist at the HTTP boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{
    DashboardState, DashboardView, EventRequest, EventResponse, ReportAggregations, SelectOption,
};
use crate::models::{ReportType, Selection};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of loaded sales records
    pub records: usize,
    /// SHA-256 of the dataset
    pub checksum: String,
    /// Dataset path, absent for in-memory tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

/// Selector options response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub reports: Vec<SelectOption>,
    pub years: Vec<i32>,
}

/// Query parameters shared by the dashboard and aggregation endpoints.
///
/// `report` accepts either the display label (`Yearly Statistics`) or the
/// short slug (`yearly`, `recession`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionQuery {
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl SelectionQuery {
    /// Resolve the query into a selection; an empty `report` counts as unset.
    pub fn selection(&self) -> Result<Selection, String> {
        let report_type = match self.report.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ReportType>().map_err(|e| e.to_string())?),
        };
        Ok(Selection::new(report_type, self.year))
    }
}

/// Raw aggregation output, or the placeholder text for an incomplete selection.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregationsResponse {
    Ready { aggregations: ReportAggregations },
    Placeholder { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_query_accepts_labels_and_slugs() {
        let query = SelectionQuery {
            report: Some("Yearly Statistics".to_string()),
            year: Some(1990),
        };
        assert_eq!(query.selection().unwrap(), Selection::yearly(1990));

        let query = SelectionQuery {
            report: Some("recession".to_string()),
            year: None,
        };
        assert_eq!(query.selection().unwrap(), Selection::recession());
    }

    #[test]
    fn test_selection_query_empty_report_is_unset() {
        let query = SelectionQuery {
            report: Some("  ".to_string()),
            year: Some(2000),
        };
        assert_eq!(query.selection().unwrap().report_type, None);
        assert_eq!(SelectionQuery::default().selection().unwrap(), Selection::default());
    }

    #[test]
    fn test_selection_query_rejects_unknown_report() {
        let query = SelectionQuery {
            report: Some("Quarterly".to_string()),
            year: None,
        };
        assert!(query.selection().unwrap_err().contains("Quarterly"));
    }

    #[test]
    fn test_placeholder_response_shape() {
        let response = AggregationsResponse::Placeholder {
            message: "pick one".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "placeholder");
        assert_eq!(json["message"], "pick one");
    }
}
