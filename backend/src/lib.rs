//! # Automobile Sales Dashboard
//!
//! Interactive dashboard over historical automobile sales.
//!
//! A CSV of monthly sales per vehicle type is loaded once into a read-only
//! [`data::SalesTable`]. Two selectors (report type and year) drive a set of
//! group-by aggregations, which are turned into four chart specifications and
//! laid out in a 2x2 grid. The browser page draws them with Plotly.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) exchanged with the browser
//! - [`config`]: TOML + environment configuration
//! - [`data`]: CSV loading, checksums and the in-memory table
//! - [`models`]: Domain types (records, months, report selection)
//! - [`routes`]: Route-specific data types
//! - [`services`]: Aggregation engine, chart mapping and the dashboard controller
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```no_run
//! use autosales_dashboard::data;
//! use autosales_dashboard::models::Selection;
//! use autosales_dashboard::services::{compute, Computation};
//!
//! let table = data::load("historical_automobile_sales.csv")?;
//! if let Computation::Ready(report) = compute(&table, &Selection::yearly(2008)) {
//!     println!("{} aggregations", report.results.len());
//! }
//! # Ok::<(), autosales_dashboard::data::DataError>(())
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
