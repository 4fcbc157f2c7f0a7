//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::SnowwizError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .snowwiz.toml in the given directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snowwiz::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Report format: {}", config.report.format);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        match fs.read_to_string(&config_path) {
            Ok(contents) => Self::parse(&config_path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(ConfigFile::default())
            }
            Err(e) => Err(SnowwizError::Io {
                context: format!("reading {}", config_path.display()),
                source: e,
            }
            .into()),
        }
    }

    /// Load config from an explicit path, which must exist
    pub fn load_file(config_path: &Path) -> Result<ConfigFile> {
        Self::load_file_with_fs(config_path, &RealFileSystem)
    }

    /// Load an explicit config path with a custom filesystem implementation
    pub fn load_file_with_fs<FS: FileSystem>(config_path: &Path, fs: &FS) -> Result<ConfigFile> {
        match fs.read_to_string(config_path) {
            Ok(contents) => Self::parse(config_path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SnowwizError::ConfigNotFound {
                    path: config_path.to_path_buf(),
                }
                .into())
            }
            Err(e) => Err(SnowwizError::Io {
                context: format!("reading {}", config_path.display()),
                source: e,
            }
            .into()),
        }
    }

    fn parse(config_path: &Path, contents: &str) -> Result<ConfigFile> {
        let config: ConfigFile =
            toml_edit::de::from_str(contents).map_err(|e| SnowwizError::InvalidConfig {
                path: config_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        log::debug!("Loaded {}", config_path.display());

        Ok(config)
    }

    /// Save config to .snowwiz.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        RealFileSystem.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}
