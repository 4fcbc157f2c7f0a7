//! Test fixture helpers for creating test projects
//!
//! Provides utilities for setting up project directories with a
//! `.snowwiz.toml` and an exported query history file.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// History with one row per sizing rule
pub const MIXED_HISTORY: &str = r#"[
  {
    "QUERY_ID": "qshort001",
    "WAREHOUSE_NAME": "2XL",
    "EXECUTION_TIME": 1200,
    "QUERY_TEXT": "SELECT id FROM dim_customer WHERE id = 42"
  },
  {
    "QUERY_ID": "qlong0001",
    "WAREHOUSE_NAME": "xs",
    "EXECUTION_TIME": 3600000,
    "BYTES_SCANNED": 9000000000,
    "CREDITS_USED": 1.5,
    "QUERY_TEXT": "INSERT INTO fact_orders SELECT * FROM staging_orders JOIN staging_items USING (order_id)"
  },
  {
    "QUERY_ID": "qmid00001",
    "WAREHOUSE_NAME": "M",
    "EXECUTION_TIME": 90000,
    "QUERY_TEXT": "SELECT region, SUM(total) FROM fact_orders GROUP BY region"
  }
]"#;

/// Creates an empty project directory
pub fn empty_project() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a project whose config points at `history.json` with `history`
///
/// # Returns
///
/// The TempDir holding the project; it must be kept alive
pub fn project_with_history(history: &str) -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("history.json"), history)?;
    write_config(temp_dir.path(), "history-file = \"history.json\"\n")?;
    Ok(temp_dir)
}

/// Writes `.snowwiz.toml` with the given contents
pub fn write_config(project: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(project.join(".snowwiz.toml"), contents)?;
    Ok(())
}
