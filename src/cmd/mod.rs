//! Command handlers for the snowwiz CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod ask;
pub mod chat;
pub mod completions;
pub mod init;
pub mod recommend;
pub mod samples;

// Re-export command functions for convenient access
pub use ask::{answer, cmd_ask};
pub use chat::{cmd_chat, run_chat};
pub use completions::{cmd_completions, write_completions};
pub use init::{cmd_init, init_project};
pub use recommend::{build_report, cmd_recommend, write_output};
pub use samples::{cmd_samples, render_samples};

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigLoader, ReportFormat};
use crate::error::SnowwizError;

/// Project directory plus the configuration that applies to it
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory that relative paths in the config resolve against
    pub root: PathBuf,
    /// Loaded configuration
    pub config: ConfigFile,
}

impl Workspace {
    /// Open the workspace for a command
    ///
    /// With an explicit config path the file must exist and its directory
    /// becomes the root. Without one, `.snowwiz.toml` is looked up in the
    /// current directory and defaults apply when it is absent.
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let config = ConfigLoader::load_file(path)?;
                let root = match path.parent() {
                    Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                    _ => env::current_dir()?,
                };
                Ok(Self { root, config })
            }
            None => Self::in_dir(&env::current_dir()?),
        }
    }

    /// Open the workspace rooted at `root`
    pub fn in_dir(root: &Path) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            config: ConfigLoader::load(root)?,
        })
    }

    /// Output format for a command
    ///
    /// `--json` wins, then an explicit `--format`, then the configured
    /// default.
    pub fn report_format(&self, json: bool, format: Option<&str>) -> Result<ReportFormat> {
        if json {
            return Ok(ReportFormat::Json);
        }

        match format {
            Some(name) => name.parse::<ReportFormat>().map_err(|_| {
                anyhow::Error::from(SnowwizError::InvalidFormat {
                    format: name.to_string(),
                    valid: ReportFormat::VALID.iter().map(|s| s.to_string()).collect(),
                })
            }),
            None => Ok(self.config.report.format),
        }
    }
}
