//! Query history exported to a JSON file
//!
//! The file holds a JSON array of rows with the query-history column names
//! (`QUERY_ID`, `WAREHOUSE_NAME`, `EXECUTION_TIME`, ...).

use super::{HistoryError, QueryHistoryRow, QueryHistorySource};
use crate::infra::{FileSystem, RealFileSystem};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// History source backed by an exported JSON file
#[derive(Debug, Clone)]
pub struct JsonHistoryFile {
    path: PathBuf,
    name: String,
    rows: Vec<QueryHistoryRow>,
}

impl JsonHistoryFile {
    /// Load rows from `path`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snowwiz::history::{JsonHistoryFile, QueryHistorySource};
    /// use std::path::Path;
    ///
    /// let source = JsonHistoryFile::load(Path::new("query_history.json"))?;
    /// let rows = source.fetch(&["01b2c3d4".to_string()])?;
    /// # Ok::<(), snowwiz::history::HistoryError>(())
    /// ```
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load rows with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<Self, HistoryError> {
        let contents = fs.read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                HistoryError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                HistoryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let rows: Vec<QueryHistoryRow> =
            serde_json::from_str(&contents).map_err(|e| HistoryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        log::debug!("Loaded {} history rows from {}", rows.len(), path.display());

        Ok(Self::from_rows(path, rows))
    }

    /// Build a source from rows already in memory
    pub fn from_rows(path: &Path, rows: Vec<QueryHistoryRow>) -> Self {
        Self {
            path: path.to_path_buf(),
            name: format!("history file {}", path.display()),
            rows,
        }
    }

    /// Path the rows were loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows in the file
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file held no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl QueryHistorySource for JsonHistoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    /// Rows for the requested ids, slowest first
    fn fetch(&self, query_ids: &[String]) -> Result<Vec<QueryHistoryRow>, HistoryError> {
        let wanted: HashSet<&str> = query_ids.iter().map(String::as_str).collect();

        let mut rows: Vec<QueryHistoryRow> = self
            .rows
            .iter()
            .filter(|row| wanted.contains(row.query_id.as_str()))
            .cloned()
            .collect();

        for id in query_ids {
            if !rows.iter().any(|row| &row.query_id == id) {
                log::warn!("Query {} not found in {}", id, self.path.display());
            }
        }

        // Stable sort keeps file order among equal runtimes
        rows.sort_by(|a, b| b.execution_time_ms.cmp(&a.execution_time_ms));

        Ok(rows)
    }
}
