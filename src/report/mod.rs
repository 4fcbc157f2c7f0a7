//! Recommendation reports
//!
//! Converts engine output into presentation rows (the column formats shown
//! to users), renders them as a markdown table, and serializes them for
//! JSON consumers.
//!
//! # Examples
//!
//! ```
//! use snowwiz::advisor::RecommendationEngine;
//! use snowwiz::history::QueryExecutionRecord;
//! use snowwiz::report::ReportOutput;
//! use snowwiz::warehouse::WarehouseSize;
//!
//! let recs = RecommendationEngine::new().recommend(&[
//!     QueryExecutionRecord::new("abc12345", WarehouseSize::XS, 8_100_000, "SELECT complex_etl_job"),
//! ]);
//! let output = ReportOutput::new("sample data", &recs);
//!
//! assert_eq!(output.recommendations[0].cost_impact, "+3");
//! assert_eq!(output.summary.upsize, 1);
//! ```

pub mod printer;
pub mod table;

pub use printer::{render_report, write_report};
pub use table::render_markdown;

use crate::advisor::{Recommendation, SizingAction};
use crate::fmt::{format_cost_delta, format_runtime_change, format_runtime_minutes};
use serde::{Deserialize, Serialize};

/// One formatted report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Query identifier
    #[serde(rename = "Query ID")]
    pub query_id: String,
    /// Current warehouse label
    #[serde(rename = "Current WH")]
    pub current_wh: String,
    /// Observed runtime in minutes, two decimals
    #[serde(rename = "Runtime (Min)")]
    pub runtime_min: String,
    /// Suggested warehouse label
    #[serde(rename = "Suggested WH")]
    pub suggested_wh: String,
    /// Runtime change, e.g. `60%`
    #[serde(rename = "Runtime Impr. (%)")]
    pub runtime_change: String,
    /// Hourly credit difference, `+N`, `-N` or `0`
    #[serde(rename = "Cost Impact (Cr/Hr Diff)")]
    pub cost_impact: String,
    /// Query text preview followed by `...`
    #[serde(rename = "Query Text")]
    pub query_text: String,
}

impl ReportRow {
    /// Column headers in display order
    pub const HEADERS: [&'static str; 7] = [
        "Query ID",
        "Current WH",
        "Runtime (Min)",
        "Suggested WH",
        "Runtime Impr. (%)",
        "Cost Impact (Cr/Hr Diff)",
        "Query Text",
    ];

    /// Format a recommendation for display
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        Self {
            query_id: rec.query_id.clone(),
            current_wh: rec.current_size.to_string(),
            runtime_min: format_runtime_minutes(rec.execution_time_ms),
            suggested_wh: rec.suggested_size.to_string(),
            runtime_change: format_runtime_change(rec.runtime_change_pct),
            cost_impact: format_cost_delta(rec.cost_delta_credits_per_hour),
            query_text: format!("{}...", rec.text_snippet),
        }
    }

    /// Cells in header order
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.query_id,
            &self.current_wh,
            &self.runtime_min,
            &self.suggested_wh,
            &self.runtime_change,
            &self.cost_impact,
            &self.query_text,
        ]
    }
}

/// Totals across a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of recommendations
    pub total: usize,
    /// Queries suggested to move up
    pub upsize: usize,
    /// Queries suggested to move down
    pub downsize: usize,
    /// Queries left on their warehouse
    pub unchanged: usize,
    /// Sum of the hourly credit differences
    pub net_cost_delta_credits_per_hour: f64,
}

impl ReportSummary {
    /// Tally a set of recommendations
    pub fn from_recommendations(recs: &[Recommendation]) -> Self {
        recs.iter().fold(Self::default(), |mut summary, rec| {
            summary.total += 1;
            match rec.action {
                SizingAction::Upsize => summary.upsize += 1,
                SizingAction::Downsize => summary.downsize += 1,
                SizingAction::Keep => summary.unchanged += 1,
            }
            summary.net_cost_delta_credits_per_hour += rec.cost_delta_credits_per_hour;
            summary
        })
    }
}

/// Complete report, also the JSON output shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOutput {
    /// History source the rows came from
    pub source: String,
    /// Formatted rows in input order
    pub recommendations: Vec<ReportRow>,
    /// Totals
    pub summary: ReportSummary,
}

impl ReportOutput {
    /// Build a report from engine output
    pub fn new(source: impl Into<String>, recs: &[Recommendation]) -> Self {
        Self {
            source: source.into(),
            recommendations: recs.iter().map(ReportRow::from_recommendation).collect(),
            summary: ReportSummary::from_recommendations(recs),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::RecommendationEngine;
    use crate::history::QueryExecutionRecord;
    use crate::warehouse::WarehouseSize;

    fn sample_recommendations() -> Vec<Recommendation> {
        RecommendationEngine::new().recommend(&[
            QueryExecutionRecord::new(
                "abc12345",
                WarehouseSize::XS,
                8_100_000,
                "SELECT complex_etl_job FROM production_table WHERE processing_date >= DATEADD(day, -30, CURRENT_DATE())",
            ),
            QueryExecutionRecord::new(
                "xyz98765",
                WarehouseSize::XL,
                2_500,
                "SELECT simple_dashboard_query FROM cache_table WHERE id = 123",
            ),
            QueryExecutionRecord::new(
                "def56789",
                WarehouseSize::M,
                120_000,
                "SELECT regular_report FROM daily_summary WHERE report_date = CURRENT_DATE()",
            ),
        ])
    }

    #[test]
    fn test_report_row_formats_upsize() {
        let recs = sample_recommendations();
        let row = ReportRow::from_recommendation(&recs[0]);

        assert_eq!(row.query_id, "abc12345");
        assert_eq!(row.current_wh, "XS");
        assert_eq!(row.runtime_min, "135.00");
        assert_eq!(row.suggested_wh, "M");
        assert_eq!(row.runtime_change, "60%");
        assert_eq!(row.cost_impact, "+3");
        assert_eq!(
            row.query_text,
            "SELECT complex_etl_job FROM production_table WHERE..."
        );
    }

    #[test]
    fn test_report_row_formats_downsize_and_keep() {
        let recs = sample_recommendations();
        let down = ReportRow::from_recommendation(&recs[1]);
        let keep = ReportRow::from_recommendation(&recs[2]);

        assert_eq!(down.runtime_min, "0.04");
        assert_eq!(down.runtime_change, "200%");
        assert_eq!(down.cost_impact, "-12");
        assert_eq!(keep.suggested_wh, "M");
        assert_eq!(keep.runtime_change, "0%");
        assert_eq!(keep.cost_impact, "0");
    }

    #[test]
    fn test_short_query_text_still_gets_ellipsis() {
        let recs = RecommendationEngine::new().recommend(&[QueryExecutionRecord::new(
            "q",
            WarehouseSize::S,
            1,
            "SELECT 1",
        )]);
        assert_eq!(ReportRow::from_recommendation(&recs[0]).query_text, "SELECT 1...");
    }

    #[test]
    fn test_summary_counts_actions_and_net_cost() {
        let summary = ReportSummary::from_recommendations(&sample_recommendations());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.upsize, 1);
        assert_eq!(summary.downsize, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.net_cost_delta_credits_per_hour, -9.0);
    }

    #[test]
    fn test_json_uses_report_column_names() {
        let output = ReportOutput::new("sample data", &sample_recommendations());
        let json = output.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "sample data");
        assert_eq!(value["recommendations"][1]["Cost Impact (Cr/Hr Diff)"], "-12");
        assert_eq!(value["recommendations"][0]["Runtime Impr. (%)"], "60%");
        assert_eq!(value["summary"]["downsize"], 1);
    }
}
