//! Ask command implementation
//!
//! Handles `snowwiz ask`, which answers a free-text question. Questions
//! naming query ids together with a warehouse topic are routed to the
//! advisor; anything else is declined.

use anyhow::Result;
use console::style;
use std::io::{self, Write};
use std::path::Path;

use super::{build_report, write_output, Workspace};
use crate::config::ReportFormat;
use crate::error::SnowwizError;
use crate::fmt::{emoji, INFO};
use crate::intent::{self, Intent};

/// Answer one question, writing the result to `out`
///
/// A question about warehouses that names no query id is an error, so the
/// caller can show how to phrase it.
pub fn answer<W: Write>(
    out: &mut W,
    workspace: &Workspace,
    question: &str,
    format: ReportFormat,
) -> Result<()> {
    match intent::route(question) {
        Intent::Recommend(ids) => {
            let report = build_report(workspace, &ids)?;
            write_output(out, &report, format, workspace.config.report.legend)
        }
        Intent::Other if intent::mentions_advisor_topic(question) => {
            Err(SnowwizError::NoQueryIds {
                input: question.to_string(),
            }
            .into())
        }
        Intent::Other => {
            log::debug!("Question not routed to advisor: {}", question);
            writeln!(
                out,
                "{} {}",
                emoji(INFO),
                style("I can only answer warehouse sizing questions that mention a query id.")
                    .dim()
            )?;
            Ok(())
        }
    }
}

/// Answer a question given on the command line
///
/// # Examples
///
/// ```no_run
/// use snowwiz::cmd::ask::cmd_ask;
///
/// let question = vec!["Optimize warehouse for query test_xyz98765".to_string()];
/// cmd_ask(None, &question, false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_ask(
    config_path: Option<&Path>,
    question: &[String],
    json: bool,
    format: Option<&str>,
) -> Result<()> {
    let workspace = Workspace::open(config_path)?;
    let format = workspace.report_format(json, format)?;
    let question = question.join(" ");

    answer(&mut io::stdout().lock(), &workspace, &question, format)
}
