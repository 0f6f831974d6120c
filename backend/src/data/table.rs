//! The in-memory sales table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::checksum::calculate_checksum;
use crate::models::SalesRecord;

/// Where a table's rows came from.
#[derive(Debug, Clone, Serialize)]
pub struct TableSource {
    /// File path, or `None` for tables built in memory
    pub path: Option<PathBuf>,
    /// SHA-256 of the raw source bytes
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Read-only table of sales records.
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate the rows after construction.
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
    source: TableSource,
}

impl SalesTable {
    pub(crate) fn new(records: Vec<SalesRecord>, source: TableSource) -> Self {
        Self { records, source }
    }

    /// Build a table directly from records (no backing file).
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let fingerprint = serde_json::to_vec(&records).unwrap_or_default();
        let source = TableSource {
            path: None,
            checksum: calculate_checksum(&fingerprint),
            loaded_at: Utc::now(),
        };
        Self::new(records, source)
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.source.path.as_deref()
    }

    pub fn checksum(&self) -> &str {
        &self.source.checksum
    }

    /// Rows flagged as falling inside a recession period.
    pub fn recession_records(&self) -> impl Iterator<Item = &SalesRecord> {
        self.records.iter().filter(|r| r.recession)
    }

    /// Rows for a single year.
    pub fn records_for_year(&self, year: i32) -> impl Iterator<Item = &SalesRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }
}
