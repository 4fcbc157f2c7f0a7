//! Query history rows and the sources that supply them
//!
//! A [`QueryHistoryRow`] is exactly what the query-history view returns:
//! upper-case column names and a free-form warehouse label. Rows are turned
//! into [`QueryExecutionRecord`]s before they reach the recommendation
//! engine, which is where unknown warehouse labels are rejected.
//!
//! # Examples
//!
//! ```
//! use snowwiz::history::{QueryHistorySource, SampleHistory};
//!
//! let source = SampleHistory::new();
//! let rows = source.fetch(&["test_abc12345".to_string()])?;
//! assert_eq!(rows[0].warehouse_name, "XS");
//! # Ok::<(), snowwiz::history::HistoryError>(())
//! ```

pub mod file;
pub mod sample;

pub use file::JsonHistoryFile;
pub use sample::SampleHistory;

use crate::advisor::AdvisorError;
use crate::config::ConfigFile;
use crate::infra::{FileSystem, RealFileSystem};
use crate::warehouse::WarehouseSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One row of query history as delivered by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHistoryRow {
    /// Query identifier
    #[serde(rename = "QUERY_ID")]
    pub query_id: String,
    /// Warehouse size label (XS, S, M, L, XL, 2XL)
    #[serde(rename = "WAREHOUSE_NAME")]
    pub warehouse_name: String,
    /// Execution time in milliseconds
    #[serde(rename = "EXECUTION_TIME")]
    pub execution_time_ms: u64,
    /// Bytes scanned
    #[serde(rename = "BYTES_SCANNED", default, skip_serializing_if = "Option::is_none")]
    pub bytes_scanned: Option<u64>,
    /// Credits consumed
    #[serde(rename = "CREDITS_USED", default, skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<f64>,
    /// SQL text
    #[serde(rename = "QUERY_TEXT")]
    pub query_text: String,
}

/// Typed query execution record consumed by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExecutionRecord {
    /// Query identifier
    pub id: String,
    /// Warehouse the query ran on
    pub warehouse_size: WarehouseSize,
    /// Execution time in milliseconds
    pub execution_time_ms: u64,
    /// Bytes scanned, unused by the sizing rules
    pub bytes_scanned: Option<u64>,
    /// Credits consumed, unused by the sizing rules
    pub credits_used: Option<f64>,
    /// SQL text
    pub text: String,
}

impl QueryExecutionRecord {
    /// Create a record with no byte or credit counters
    pub fn new(
        id: impl Into<String>,
        warehouse_size: WarehouseSize,
        execution_time_ms: u64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            warehouse_size,
            execution_time_ms,
            bytes_scanned: None,
            credits_used: None,
            text: text.into(),
        }
    }

    /// Convert a raw history row, rejecting unrecognized warehouse labels
    pub fn try_from_row(row: &QueryHistoryRow) -> Result<Self, AdvisorError> {
        let warehouse_size = WarehouseSize::from_label(&row.warehouse_name).ok_or_else(|| {
            AdvisorError::UnknownWarehouseSize {
                label: row.warehouse_name.clone(),
                query_id: Some(row.query_id.clone()),
            }
        })?;

        Ok(Self {
            id: row.query_id.clone(),
            warehouse_size,
            execution_time_ms: row.execution_time_ms,
            bytes_scanned: row.bytes_scanned,
            credits_used: row.credits_used,
            text: row.query_text.clone(),
        })
    }
}

impl TryFrom<&QueryHistoryRow> for QueryExecutionRecord {
    type Error = AdvisorError;

    fn try_from(row: &QueryHistoryRow) -> Result<Self, Self::Error> {
        Self::try_from_row(row)
    }
}

/// Errors raised while reading query history
#[derive(Error, Debug)]
pub enum HistoryError {
    /// History file does not exist
    #[error("Query history file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// History file could not be read
    #[error("Failed to read query history file: {}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// History file is not a JSON array of rows
    #[error("Failed to parse query history file: {}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },
}

/// Supplier of query history rows
pub trait QueryHistorySource {
    /// Short human-readable name of the source
    fn name(&self) -> &str;

    /// Fetch the rows for the given query ids
    fn fetch(&self, query_ids: &[String]) -> Result<Vec<QueryHistoryRow>, HistoryError>;
}

/// Pick the history source for a project
///
/// Uses the configured JSON history file when it exists, otherwise falls
/// back to the built-in sample data.
pub fn open_source(
    config: &ConfigFile,
    project_root: &Path,
) -> Result<Box<dyn QueryHistorySource>, HistoryError> {
    open_source_with_fs(config, project_root, &RealFileSystem)
}

/// Pick the history source with a custom filesystem implementation
pub fn open_source_with_fs<FS: FileSystem>(
    config: &ConfigFile,
    project_root: &Path,
    fs: &FS,
) -> Result<Box<dyn QueryHistorySource>, HistoryError> {
    if let Some(ref history_file) = config.history_file {
        let path = project_root.join(history_file);
        if fs.exists(&path) {
            let source = JsonHistoryFile::load_with_fs(&path, fs)?;
            log::debug!(
                "Using query history file {} ({} rows)",
                source.path().display(),
                source.len()
            );
            return Ok(Box::new(source));
        }
        log::warn!(
            "Configured history file {} not found, using sample data",
            path.display()
        );
    } else {
        log::info!("No history file configured, using sample data");
    }

    Ok(Box::new(SampleHistory::new()))
}
