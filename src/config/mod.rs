//! Configuration for snowwiz
//!
//! This module provides:
//! - .snowwiz.toml config file support
//! - Loading with defaults when the file is absent

pub mod file;
pub mod loader;

pub use file::{ConfigFile, ReportFormat, ReportSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
