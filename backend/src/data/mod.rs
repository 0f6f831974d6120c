//! Data module: the sales table and how it is loaded.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  CSV file (read once)        │
//! └──────────────┬───────────────┘
//!                │ loader::load
//! ┌──────────────▼───────────────┐
//! │  SalesTable (Arc, read-only) │
//! └──────────────────────────────┘
//! ```
//!
//! The table is constructed at startup and passed by handle into every
//! aggregation; it is never reloaded or invalidated.

pub mod checksum;
pub mod error;
pub mod loader;
pub mod table;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;

pub use checksum::calculate_checksum;
pub use error::{DataError, DataResult, ErrorContext};
pub use loader::{load, load_from_str, DEFAULT_DATA_PATH};
pub use table::{SalesTable, TableSource};
