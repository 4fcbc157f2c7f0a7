//! Rule evaluation

use super::recommendation::{Recommendation, SizingAction};
use super::AdvisorError;
use crate::fmt::snippet;
use crate::history::{QueryExecutionRecord, QueryHistoryRow};
use crate::warehouse::{CreditRateTable, WarehouseSize};

/// Queries slower than this on XS are upsized (45 minutes)
pub const UPSIZE_MIN_RUNTIME_MS: u64 = 2_700_000;

/// Queries faster than this on L and above are downsized (5 seconds)
pub const DOWNSIZE_MAX_RUNTIME_MS: u64 = 5_000;

/// Assumed speedup when moving XS -> M
pub const UPSIZE_SPEEDUP: f64 = 2.5;

/// Assumed slowdown when moving a large warehouse down to M
pub const DOWNSIZE_SLOWDOWN: f64 = 3.0;

/// Characters of query text kept in a recommendation
pub const SNIPPET_CHARS: usize = 50;

const UPSIZE_SOURCES: &[WarehouseSize] = &[WarehouseSize::XS];
const DOWNSIZE_SOURCES: &[WarehouseSize] =
    &[WarehouseSize::L, WarehouseSize::XL, WarehouseSize::XXL];
const TARGET_SIZE: WarehouseSize = WarehouseSize::M;

/// Applies the sizing rules to query execution records
///
/// Stateless: the same input always yields the same recommendations.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    rates: &'static CreditRateTable,
}

impl RecommendationEngine {
    /// Create an engine using the standard credit rates
    pub fn new() -> Self {
        Self {
            rates: CreditRateTable::standard(),
        }
    }

    /// Recommend a warehouse for each record, preserving order
    pub fn recommend(&self, records: &[QueryExecutionRecord]) -> Vec<Recommendation> {
        records.iter().map(|r| self.recommend_one(r)).collect()
    }

    /// Convert raw history rows and recommend for each
    ///
    /// Fails on the first row whose warehouse label is not recognized;
    /// no recommendations are returned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use snowwiz::advisor::RecommendationEngine;
    /// use snowwiz::history::QueryHistoryRow;
    ///
    /// let row = QueryHistoryRow {
    ///     query_id: "q1".to_string(),
    ///     warehouse_name: "COMPUTE_WH".to_string(),
    ///     execution_time_ms: 1_000,
    ///     bytes_scanned: None,
    ///     credits_used: None,
    ///     query_text: "SELECT 1".to_string(),
    /// };
    ///
    /// assert!(RecommendationEngine::new().recommend_rows(&[row]).is_err());
    /// ```
    pub fn recommend_rows(
        &self,
        rows: &[QueryHistoryRow],
    ) -> Result<Vec<Recommendation>, AdvisorError> {
        let records = rows
            .iter()
            .map(QueryExecutionRecord::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.recommend(&records))
    }

    /// Recommend a warehouse for a single record
    pub fn recommend_one(&self, record: &QueryExecutionRecord) -> Recommendation {
        let current = record.warehouse_size;
        let runtime_ms = record.execution_time_ms;

        let (action, suggested, estimated_runtime_ms, runtime_change_pct, cost_delta) =
            if runtime_ms > UPSIZE_MIN_RUNTIME_MS && UPSIZE_SOURCES.contains(&current) {
                let new_runtime = runtime_ms as f64 / UPSIZE_SPEEDUP;
                let pct = ((1.0 - new_runtime / runtime_ms as f64) * 100.0).round() as i64;
                (
                    SizingAction::Upsize,
                    TARGET_SIZE,
                    new_runtime,
                    pct,
                    self.rates.delta(current, TARGET_SIZE),
                )
            } else if runtime_ms < DOWNSIZE_MAX_RUNTIME_MS && DOWNSIZE_SOURCES.contains(&current) {
                let new_runtime = runtime_ms as f64 * DOWNSIZE_SLOWDOWN;
                // A zero runtime has no ratio; the slowdown factor gives the same answer
                let ratio = if runtime_ms == 0 {
                    DOWNSIZE_SLOWDOWN
                } else {
                    new_runtime / runtime_ms as f64
                };
                let pct = ((ratio - 1.0) * 100.0).round() as i64;
                (
                    SizingAction::Downsize,
                    TARGET_SIZE,
                    new_runtime,
                    pct,
                    self.rates.delta(current, TARGET_SIZE),
                )
            } else {
                (SizingAction::Keep, current, runtime_ms as f64, 0, 0)
            };

        if action != SizingAction::Keep {
            log::debug!(
                "{}: {} {} -> {} ({:+} cr/hr)",
                record.id,
                action,
                current,
                suggested,
                cost_delta
            );
        }

        Recommendation {
            query_id: record.id.clone(),
            current_size: current,
            suggested_size: suggested,
            action,
            execution_time_ms: runtime_ms,
            estimated_runtime_ms,
            runtime_change_pct,
            cost_delta_credits_per_hour: cost_delta as f64,
            text_snippet: snippet(&record.text, SNIPPET_CHARS),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
