//! Route-specific data types.
//!
//! Each submodule defines the serializable types exchanged on one group of
//! endpoints, plus the path constants the HTTP router mounts them under.

pub mod aggregation;
pub mod dashboard;
