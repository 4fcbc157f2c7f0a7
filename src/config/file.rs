//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".snowwiz.toml";

/// snowwiz configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// JSON export of query history, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,

    /// Report presentation settings
    #[serde(default)]
    pub report: ReportSettings,
}

/// Report presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Print the cost legend under the table
    #[serde(default = "default_legend")]
    pub legend: bool,
}

fn default_legend() -> bool {
    true
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            legend: default_legend(),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown table with summary
    #[default]
    Markdown,
    /// Machine-readable JSON
    Json,
}

impl ReportFormat {
    /// Accepted format names
    pub const VALID: [&'static str; 2] = ["markdown", "json"];
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => anyhow::bail!(
                "Unknown report format '{}' (expected one of: {})",
                other,
                Self::VALID.join(", ")
            ),
        }
    }
}
