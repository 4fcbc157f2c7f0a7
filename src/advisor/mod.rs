//! Warehouse sizing recommendations
//!
//! The engine is a two-rule decision table:
//! - queries running longer than 45 minutes on XS are moved up to M
//! - queries finishing in under 5 seconds on L, XL or 2XL are moved down to M
//!
//! Everything else keeps its warehouse.
//!
//! # Examples
//!
//! ```
//! use snowwiz::advisor::{RecommendationEngine, SizingAction};
//! use snowwiz::history::QueryExecutionRecord;
//! use snowwiz::warehouse::WarehouseSize;
//!
//! let engine = RecommendationEngine::new();
//! let records = vec![
//!     QueryExecutionRecord::new("abc12345", WarehouseSize::XS, 8_100_000, "SELECT complex_etl_job"),
//!     QueryExecutionRecord::new("xyz98765", WarehouseSize::XL, 2_500, "SELECT dashboard"),
//! ];
//!
//! let recs = engine.recommend(&records);
//! assert_eq!(recs[0].action, SizingAction::Upsize);
//! assert_eq!(recs[0].runtime_change_pct, 60);
//! assert_eq!(recs[1].cost_delta_credits_per_hour, -12.0);
//! ```

pub mod engine;
pub mod recommendation;

pub use engine::{
    RecommendationEngine, DOWNSIZE_MAX_RUNTIME_MS, DOWNSIZE_SLOWDOWN, UPSIZE_MIN_RUNTIME_MS,
    UPSIZE_SPEEDUP,
};
pub use recommendation::{Recommendation, SizingAction};

use thiserror::Error;

/// Errors raised while turning history into recommendations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    /// Warehouse label is not in the credit rate table
    #[error("Unknown warehouse size '{label}'{}", query_suffix(.query_id))]
    UnknownWarehouseSize {
        /// Label as received
        label: String,
        /// Query the label came from, when known
        query_id: Option<String>,
    },
}

fn query_suffix(query_id: &Option<String>) -> String {
    match query_id {
        Some(id) => format!(" for query {}", id),
        None => String::new(),
    }
}
