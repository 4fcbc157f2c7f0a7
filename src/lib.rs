#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! snowwiz library
//!
//! This library provides the warehouse sizing rules behind the `snowwiz`
//! CLI. It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Running the engine over records you already have:
//!
//! ```
//! use snowwiz::advisor::{RecommendationEngine, SizingAction};
//! use snowwiz::history::QueryExecutionRecord;
//! use snowwiz::warehouse::WarehouseSize;
//!
//! let records = vec![
//!     // 135 minutes on an extra-small warehouse
//!     QueryExecutionRecord::new("abc12345", WarehouseSize::XS, 8_100_000, "SELECT complex_etl_job"),
//!     // 2.5 seconds on an extra-large one
//!     QueryExecutionRecord::new("xyz98765", WarehouseSize::XL, 2_500, "SELECT COUNT(*) FROM t"),
//! ];
//!
//! let recs = RecommendationEngine::new().recommend(&records);
//!
//! assert_eq!(recs[0].action, SizingAction::Upsize);
//! assert_eq!(recs[0].runtime_change_pct, 60);
//! assert_eq!(recs[0].cost_delta_credits_per_hour, 3.0);
//!
//! assert_eq!(recs[1].action, SizingAction::Downsize);
//! assert_eq!(recs[1].runtime_change_pct, 200);
//! assert_eq!(recs[1].cost_delta_credits_per_hour, -12.0);
//! ```
//!
//! # Advanced Example: History Sources and Reports
//!
//! Fetching raw rows from a history source and rendering the report:
//!
//! ```
//! use snowwiz::advisor::RecommendationEngine;
//! use snowwiz::history::{QueryHistorySource, SampleHistory};
//! use snowwiz::report::{render_markdown, ReportOutput};
//!
//! let source = SampleHistory::new();
//! let rows = source.fetch(&["test_abc12345".to_string()])?;
//! let recs = RecommendationEngine::new().recommend_rows(&rows)?;
//!
//! let report = ReportOutput::new(source.name(), &recs);
//! let table = render_markdown(&report.recommendations);
//!
//! assert!(table.contains("| test_abc12345"));
//! assert_eq!(report.summary.upsize, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Recommendation engine and sizing rules
pub mod advisor;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Query history rows and the sources that provide them
pub mod history;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Routing free-text questions to the advisor
pub mod intent;
/// Report rows, tables and JSON output
pub mod report;
/// Warehouse sizes and credit rates
pub mod warehouse;
