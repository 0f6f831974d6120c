//! Reactive dashboard controller.
//!
//! Selector changes arrive as [`InputEvent`]s. Each named input has a list of
//! handlers that update the [`DashboardState`]; after they run, the output
//! region is recomputed from the shared table. Everything happens
//! synchronously inside [`Dashboard::dispatch`].

use std::collections::HashMap;
use std::sync::Arc;

use super::aggregation::{compute, Computation};
use super::charts::{build_charts, grid};
use crate::api::{
    DashboardState, DashboardView, InputEvent, InputId, OutputRegion, SelectOption, SelectorView,
    DASHBOARD_TITLE, REPORT_SELECTOR_ID, YEAR_SELECTOR_ID,
};
use crate::data::SalesTable;
use crate::models::{year_options, ReportType, YEAR_MAX, YEAR_MIN};

/// A state update triggered by one input.
pub type Handler = fn(&mut DashboardState, &InputEvent);

/// Report-type change: enable the year selector only for the yearly report
/// and clear any previously chosen year. Re-selecting the current report is
/// not a change and leaves the state alone.
pub fn toggle_year_selector(state: &mut DashboardState, event: &InputEvent) {
    if let InputEvent::ReportType(report) = event {
        if state.report_type == *report {
            return;
        }
        state.report_type = *report;
        state.year_disabled = *report != Some(ReportType::Yearly);
        state.year = None;
    }
}

/// Year change: accepted only while the year selector is enabled and only
/// for years the selector offers.
pub fn select_year(state: &mut DashboardState, event: &InputEvent) {
    if let InputEvent::Year(year) = event {
        state.year = if state.year_disabled {
            None
        } else {
            year.filter(|y| (YEAR_MIN..=YEAR_MAX).contains(y))
        };
    }
}

/// Dashboard controller bound to a loaded sales table.
pub struct Dashboard {
    table: Arc<SalesTable>,
    handlers: HashMap<InputId, Vec<Handler>>,
}

impl Dashboard {
    /// Create a dashboard with the standard selector wiring.
    pub fn new(table: Arc<SalesTable>) -> Self {
        let mut dashboard = Self {
            table,
            handlers: HashMap::new(),
        };
        dashboard.on(InputId::ReportType, toggle_year_selector);
        dashboard.on(InputId::Year, select_year);
        dashboard
    }

    /// Register an additional handler for an input.
    pub fn on(&mut self, input: InputId, handler: Handler) {
        self.handlers.entry(input).or_default().push(handler);
    }

    pub fn table(&self) -> &Arc<SalesTable> {
        &self.table
    }

    /// Apply an input event to `state` and render the resulting view.
    pub fn dispatch(&self, state: &mut DashboardState, event: &InputEvent) -> DashboardView {
        *state = state.normalized();

        let input = event.input();
        log::debug!("Dispatching {:?} event: {:?}", input, event);
        if let Some(handlers) = self.handlers.get(&input) {
            for handler in handlers {
                handler(state, event);
            }
        }

        self.render(state)
    }

    /// Render the view for a state without changing it.
    pub fn render(&self, state: &DashboardState) -> DashboardView {
        let state = state.normalized();

        DashboardView {
            title: DASHBOARD_TITLE.to_string(),
            report_selector: report_selector(&state),
            year_selector: year_selector(&state),
            output: self.output(&state),
        }
    }

    fn output(&self, state: &DashboardState) -> OutputRegion {
        match compute(&self.table, &state.selection()) {
            Computation::Ready(report) => grid(build_charts(&report)),
            Computation::NoOp(placeholder) => OutputRegion::Placeholder {
                message: placeholder.message().to_string(),
            },
        }
    }
}

/// Options offered by the report-type selector.
pub fn report_options() -> Vec<SelectOption> {
    ReportType::ALL
        .iter()
        .map(|r| SelectOption {
            label: r.label().to_string(),
            value: r.label().to_string(),
        })
        .collect()
}

/// Options offered by the year selector.
pub fn year_select_options() -> Vec<SelectOption> {
    year_options()
        .into_iter()
        .map(|y| SelectOption {
            label: y.to_string(),
            value: y.to_string(),
        })
        .collect()
}

fn report_selector(state: &DashboardState) -> SelectorView {
    SelectorView {
        id: REPORT_SELECTOR_ID.to_string(),
        label: "Select Statistics Report:".to_string(),
        placeholder: "Select a report type".to_string(),
        options: report_options(),
        value: state.report_type.map(|r| r.label().to_string()),
        disabled: false,
    }
}

fn year_selector(state: &DashboardState) -> SelectorView {
    SelectorView {
        id: YEAR_SELECTOR_ID.to_string(),
        label: "Select Year:".to_string(),
        placeholder: "Select a year".to_string(),
        options: year_select_options(),
        value: state.year.map(|y| y.to_string()),
        disabled: state.year_disabled,
    }
}
