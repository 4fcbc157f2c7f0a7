//! Recommendation types

use crate::warehouse::WarehouseSize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sizing rule produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingAction {
    /// Long-running query on a small warehouse
    Upsize,
    /// Very fast query on a large warehouse
    Downsize,
    /// Warehouse already fits the workload
    Keep,
}

impl fmt::Display for SizingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingAction::Upsize => write!(f, "upsize"),
            SizingAction::Downsize => write!(f, "downsize"),
            SizingAction::Keep => write!(f, "keep"),
        }
    }
}

/// Sizing recommendation for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Query identifier
    pub query_id: String,
    /// Warehouse the query ran on
    pub current_size: WarehouseSize,
    /// Suggested warehouse
    pub suggested_size: WarehouseSize,
    /// Rule that fired
    pub action: SizingAction,
    /// Observed execution time in milliseconds
    pub execution_time_ms: u64,
    /// Estimated execution time on the suggested warehouse
    pub estimated_runtime_ms: f64,
    /// Estimated runtime change in percent (improvement for upsize, slowdown for downsize)
    pub runtime_change_pct: i64,
    /// Hourly credit difference; positive costs more, negative saves
    pub cost_delta_credits_per_hour: f64,
    /// Leading characters of the query text
    pub text_snippet: String,
}

impl Recommendation {
    /// Whether the suggestion differs from the current warehouse
    pub fn is_change(&self) -> bool {
        self.action != SizingAction::Keep
    }
}
