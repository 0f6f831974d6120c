//! Service layer for business logic.
//!
//! Services sit between the loaded sales table and the HTTP layer: the
//! aggregation engine computes grouped statistics, the chart mapper turns
//! them into chart specifications, and the dashboard controller wires the
//! selectors to both.

pub mod aggregation;
pub mod charts;
pub mod dashboard;



pub use aggregation::{compute, Computation, Placeholder};
pub use charts::{build_charts, grid};
pub use dashboard::Dashboard;
