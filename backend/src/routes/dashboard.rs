use serde::{Deserialize, Serialize};

use crate::models::{ReportType, Selection};

// =========================================================
// Dashboard types + routes
// =========================================================

/// Route path for rendering a dashboard view from a selection.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Route path for dispatching selector events.
pub const DASHBOARD_EVENTS_PATH: &str = "/dashboard/events";
/// Route path for selector options.
pub const OPTIONS_PATH: &str = "/options";

/// Page heading.
pub const DASHBOARD_TITLE: &str = "Automobile Sales Statistics Dashboard";

/// DOM id of the report-type selector.
pub const REPORT_SELECTOR_ID: &str = "dropdown-statistics";
/// DOM id of the year selector.
pub const YEAR_SELECTOR_ID: &str = "select-year";

/// Chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// A single value on a chart axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

/// One trace of a chart.
///
/// For pie charts `x` holds the slice names and `y` the slice values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Trace name (the color group), `None` for single-trace charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
}

/// Everything the browser needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Column bound to the x axis (pie: slice names)
    pub x: String,
    /// Column bound to the y axis (pie: slice values)
    pub y: String,
    /// Column used to split traces by color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub series: Vec<ChartSeries>,
}

/// The output region below the selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputRegion {
    Placeholder { message: String },
    Grid { rows: [[ChartSpec; 2]; 2] },
}

impl OutputRegion {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, OutputRegion::Placeholder { .. })
    }

    /// Charts in row-major order (empty for a placeholder).
    pub fn charts(&self) -> Vec<&ChartSpec> {
        match self {
            OutputRegion::Placeholder { .. } => Vec::new(),
            OutputRegion::Grid { rows } => rows.iter().flat_map(|row| row.iter()).collect(),
        }
    }
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Rendered state of a dropdown selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorView {
    pub id: String,
    pub label: String,
    pub placeholder: String,
    pub options: Vec<SelectOption>,
    pub value: Option<String>,
    pub disabled: bool,
}

/// Full dashboard UI tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub report_selector: SelectorView,
    pub year_selector: SelectorView,
    pub output: OutputRegion,
}

/// Client-side selector state.
///
/// `year_disabled` is derived from `report_type`; see [`DashboardState::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    #[serde(default)]
    pub report_type: Option<ReportType>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_year_disabled")]
    pub year_disabled: bool,
}

fn default_year_disabled() -> bool {
    true
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            report_type: None,
            year: None,
            year_disabled: true,
        }
    }
}

impl DashboardState {
    /// Build a state from a selection, applying the selector invariants.
    pub fn from_selection(selection: Selection) -> Self {
        Self {
            report_type: selection.report_type,
            year: selection.year,
            year_disabled: true,
        }
        .normalized()
    }

    /// Re-derive the year selector's enabled flag and drop a year the
    /// disabled selector cannot hold.
    pub fn normalized(mut self) -> Self {
        self.year_disabled = self.report_type != Some(ReportType::Yearly);
        if self.year_disabled {
            self.year = None;
        }
        self
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.report_type, self.year)
    }
}

/// Named selector inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputId {
    ReportType,
    Year,
}

/// A change of one selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    ReportType(Option<ReportType>),
    Year(Option<i32>),
}

impl InputEvent {
    pub fn input(&self) -> InputId {
        match self {
            InputEvent::ReportType(_) => InputId::ReportType,
            InputEvent::Year(_) => InputId::Year,
        }
    }
}

/// Body of `POST /v1/dashboard/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub state: DashboardState,
    pub event: InputEvent,
}

/// Response of `POST /v1/dashboard/events`.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub state: DashboardState,
    pub view: DashboardView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_disables_year() {
        let state = DashboardState::default();
        assert!(state.year_disabled);
        assert_eq!(state.selection(), Selection::default());
    }

    #[test]
    fn test_normalized_clears_year_for_recession() {
        let state = DashboardState {
            report_type: Some(ReportType::RecessionPeriod),
            year: Some(1990),
            year_disabled: false,
        }
        .normalized();
        assert!(state.year_disabled);
        assert_eq!(state.year, None);
    }

    #[test]
    fn test_from_selection_yearly_keeps_year() {
        let state = DashboardState::from_selection(Selection::yearly(2001));
        assert!(!state.year_disabled);
        assert_eq!(state.year, Some(2001));
    }

    #[test]
    fn test_input_event_wire_format() {
        let event: InputEvent =
            serde_json::from_str(r#"{"input": "report_type", "value": "Yearly Statistics"}"#)
                .unwrap();
        assert_eq!(event, InputEvent::ReportType(Some(ReportType::Yearly)));
        assert_eq!(event.input(), InputId::ReportType);

        let cleared: InputEvent = serde_json::from_str(r#"{"input": "year", "value": null}"#).unwrap();
        assert_eq!(cleared, InputEvent::Year(None));
    }

    #[test]
    fn test_event_request_defaults_state() {
        let request: EventRequest =
            serde_json::from_str(r#"{"event": {"input": "year", "value": 1985}}"#).unwrap();
        assert_eq!(request.state, DashboardState::default());
        assert_eq!(request.event, InputEvent::Year(Some(1985)));
    }

    #[test]
    fn test_placeholder_serialization() {
        let region = OutputRegion::Placeholder { message: "pick one".into() };
        assert_eq!(
            serde_json::to_value(&region).unwrap(),
            serde_json::json!({"type": "placeholder", "message": "pick one"})
        );
        assert!(region.charts().is_empty());
    }
}
