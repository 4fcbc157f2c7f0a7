//! Chat command implementation
//!
//! Handles `snowwiz chat`, an interactive loop that answers one question per
//! input line until the user quits or input ends.

use anyhow::{Context, Result};
use console::style;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::{answer, Workspace};
use crate::config::ReportFormat;
use crate::error::ErrorFormatter;
use crate::fmt::{emoji, BULB, WAREHOUSE};

const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

fn is_quit(line: &str) -> bool {
    QUIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word))
}

/// Run the question loop over arbitrary input and output
///
/// Blank lines are skipped. A failed answer is reported inline and the loop
/// keeps going.
pub fn run_chat<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    workspace: &Workspace,
    format: ReportFormat,
) -> Result<()> {
    writeln!(
        out,
        "{} {}",
        emoji(WAREHOUSE),
        style("snowwiz chat: ask about warehouse sizing for your queries").bold()
    )?;
    writeln!(
        out,
        "{} Try: {}",
        emoji(BULB),
        style("optimize warehouse for query test_abc12345").cyan()
    )?;
    writeln!(out, "   Type 'quit' to exit.")?;

    let mut line = String::new();
    loop {
        write!(out, "\n{} ", style(">").cyan().bold())?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read question")?;
        if read == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if is_quit(question) {
            break;
        }

        if let Err(e) = answer(out, workspace, question, format) {
            log::debug!("Answer failed: {:#}", e);
            write!(out, "{}", ErrorFormatter::format(&e))?;
        }
    }

    writeln!(out, "\nGoodbye!")?;
    Ok(())
}

/// Start an interactive session on stdin/stdout
pub fn cmd_chat(config_path: Option<&Path>, json: bool, format: Option<&str>) -> Result<()> {
    let workspace = Workspace::open(config_path)?;
    let format = workspace.report_format(json, format)?;

    run_chat(io::stdin().lock(), &mut io::stdout().lock(), &workspace, format)
}
