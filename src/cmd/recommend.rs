//! Recommend command implementation
//!
//! Handles the `snowwiz recommend` command which looks up query history for
//! the given ids and prints warehouse sizing suggestions.

use anyhow::{Context, Result};
use console::style;
use std::io::{self, Write};
use std::path::Path;

use super::Workspace;
use crate::advisor::RecommendationEngine;
use crate::config::ReportFormat;
use crate::error::SnowwizError;
use crate::fmt::{emoji, MICROSCOPE};
use crate::history;
use crate::report::{self, ReportOutput};

/// Fetch history for `ids` and run the engine over it
///
/// Fails with `NoQueryDetails` when the source knows none of the ids, and
/// with `UnknownWarehouseSize` on the first row whose warehouse label is
/// not recognized.
///
/// # Examples
///
/// ```
/// use snowwiz::cmd::{build_report, Workspace};
/// use snowwiz::config::ConfigFile;
///
/// let workspace = Workspace { root: ".".into(), config: ConfigFile::default() };
/// let report = build_report(&workspace, &["test_abc12345".to_string()])?;
///
/// assert_eq!(report.source, "sample data");
/// assert_eq!(report.recommendations[0].suggested_wh, "M");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_report(workspace: &Workspace, ids: &[String]) -> Result<ReportOutput> {
    let source =
        history::open_source(&workspace.config, &workspace.root).map_err(SnowwizError::from)?;

    log::info!("Fetching {} query id(s) from {}", ids.len(), source.name());
    let rows = source.fetch(ids).map_err(SnowwizError::from)?;

    if rows.is_empty() {
        return Err(SnowwizError::NoQueryDetails { ids: ids.to_vec() }.into());
    }

    let recs = RecommendationEngine::new()
        .recommend_rows(&rows)
        .map_err(SnowwizError::from)?;

    Ok(ReportOutput::new(source.name(), &recs))
}

/// Write a report in the requested format
pub fn write_output<W: Write>(
    out: &mut W,
    report: &ReportOutput,
    format: ReportFormat,
    legend: bool,
) -> Result<()> {
    match format {
        ReportFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            writeln!(out, "{}", json)?;
        }
        ReportFormat::Markdown => report::write_report(out, report, legend)?,
    }
    Ok(())
}

/// Recommend warehouses for the given query ids
///
/// # Examples
///
/// ```no_run
/// use snowwiz::cmd::recommend::cmd_recommend;
///
/// let ids = vec!["test_abc12345".to_string(), "test_xyz98765".to_string()];
/// cmd_recommend(None, &ids, false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_recommend(
    config_path: Option<&Path>,
    ids: &[String],
    json: bool,
    format: Option<&str>,
) -> Result<()> {
    let workspace = Workspace::open(config_path)?;
    let format = workspace.report_format(json, format)?;

    if format == ReportFormat::Markdown {
        println!(
            "{} Analyzing {} {}",
            emoji(MICROSCOPE),
            ids.len(),
            if ids.len() == 1 { "query" } else { "queries" }
        );
        println!("   {}", style(ids.join(", ")).dim());
    }

    let report = build_report(&workspace, ids)?;
    write_output(
        &mut io::stdout().lock(),
        &report,
        format,
        workspace.config.report.legend,
    )
}
