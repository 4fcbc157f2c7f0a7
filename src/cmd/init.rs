//! Init command implementation
//!
//! Handles the `snowwiz init` command which writes a starter
//! `.snowwiz.toml` into the current directory.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile};
use crate::fmt::{emoji, BULB, CHECKMARK, INFO, WARNING};

/// Write a default config into `project_root`
///
/// Returns `false` without touching anything when a config already exists.
pub fn init_project(project_root: &Path, history_file: Option<&Path>) -> Result<bool> {
    if config::ConfigLoader::exists(project_root) {
        log::debug!("{} already present in {}", config::CONFIG_FILE_NAME, project_root.display());
        return Ok(false);
    }

    let config = ConfigFile {
        history_file: history_file.map(Path::to_path_buf),
        ..ConfigFile::default()
    };
    config::ConfigLoader::save(&config, project_root)?;

    Ok(true)
}

/// Initialize snowwiz configuration in the current directory
///
/// # Examples
///
/// ```no_run
/// use snowwiz::cmd::init::cmd_init;
/// use std::path::Path;
///
/// // Start from the built-in sample data
/// cmd_init(None)?;
///
/// // Point at an exported QUERY_HISTORY file
/// cmd_init(Some(Path::new("query_history.json")))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(history_file: Option<&Path>) -> Result<()> {
    let project_root = env::current_dir()?;

    if !init_project(&project_root, history_file)? {
        println!(
            "{} Config file already exists: {}",
            emoji(WARNING),
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    println!(
        "{} Created {}",
        emoji(CHECKMARK),
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    match history_file {
        Some(path) => println!(
            "{}  Query history will be read from {}",
            emoji(INFO),
            style(path.display()).green()
        ),
        None => println!(
            "{}  No history file set, the built-in sample data will be used",
            emoji(INFO)
        ),
    }
    println!();
    println!("{}  Next Steps:", emoji(BULB));
    println!(
        "   1. Run {} to see the sample query ids",
        style("snowwiz samples").cyan()
    );
    println!(
        "   2. Run {} for sizing advice",
        style("snowwiz recommend <QUERY_ID>...").cyan()
    );

    Ok(())
}
