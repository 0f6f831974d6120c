//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! dashboard controller for business logic. Aggregation is CPU-bound, so it
//! runs on the blocking pool.
//!
//! Extractor rejections (malformed query strings or bodies) are turned into
//! `AppError::BadRequest`, so every client error carries a JSON `ApiError`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::Uri,
    response::Html,
    Json,
};

use super::dto::{
    AggregationsResponse, DashboardView, EventRequest, EventResponse, HealthResponse,
    OptionsResponse, SelectionQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::DashboardState;
use crate::models::year_options;
use crate::services::dashboard::report_options;
use crate::services::{compute, Computation};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

// =============================================================================
// Page + health
// =============================================================================

/// GET /
///
/// HTML shell holding the two selectors and the output region.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint reporting the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let table = state.table();
    let source = table.source();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: table.len(),
        checksum: source.checksum.clone(),
        source: source.path.as_ref().map(|p| p.display().to_string()),
        loaded_at: source.loaded_at,
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/options
///
/// Options offered by the report-type and year selectors.
pub async fn get_options() -> HandlerResult<OptionsResponse> {
    Ok(Json(OptionsResponse {
        reports: report_options(),
        years: year_options(),
    }))
}

/// GET /v1/dashboard?report=..&year=..
///
/// Render the dashboard view for a selection.
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: Result<Query<SelectionQuery>, QueryRejection>,
) -> HandlerResult<DashboardView> {
    let Query(query) = query?;
    let selection = query.selection().map_err(AppError::BadRequest)?;
    let dashboard = state.dashboard.clone();

    let view = run_blocking(move || {
        dashboard.render(&DashboardState::from_selection(selection))
    })
    .await?;

    Ok(Json(view))
}

/// POST /v1/dashboard/events
///
/// Dispatch a selector change against the client's current state and return
/// the updated state along with the re-rendered view.
pub async fn post_dashboard_event(
    State(state): State<AppState>,
    request: Result<Json<EventRequest>, JsonRejection>,
) -> HandlerResult<EventResponse> {
    let Json(request) = request?;
    tracing::debug!(event = ?request.event, "dashboard event");
    let dashboard = state.dashboard.clone();

    let response = run_blocking(move || {
        let mut state = request.state;
        let view = dashboard.dispatch(&mut state, &request.event);
        EventResponse { state, view }
    })
    .await?;

    Ok(Json(response))
}

/// GET /v1/aggregations?report=..&year=..
///
/// Raw aggregation results behind the four charts.
pub async fn get_aggregations(
    State(state): State<AppState>,
    query: Result<Query<SelectionQuery>, QueryRejection>,
) -> HandlerResult<AggregationsResponse> {
    let Query(query) = query?;
    let selection = query.selection().map_err(AppError::BadRequest)?;
    let dashboard = state.dashboard.clone();

    let response = run_blocking(move || match compute(dashboard.table(), &selection) {
        Computation::Ready(aggregations) => AggregationsResponse::Ready { aggregations },
        Computation::NoOp(placeholder) => AggregationsResponse::Placeholder {
            message: placeholder.message().to_string(),
        },
    })
    .await?;

    Ok(Json(response))
}
