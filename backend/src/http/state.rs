//! Application state for the HTTP server.

use std::sync::Arc;

use crate::data::SalesTable;
use crate::services::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard controller bound to the loaded sales table
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Create a new application state with the given dashboard.
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    /// Build the state straight from a loaded table.
    pub fn from_table(table: Arc<SalesTable>) -> Self {
        Self::new(Arc::new(Dashboard::new(table)))
    }

    pub fn table(&self) -> &SalesTable {
        self.dashboard.table()
    }
}
