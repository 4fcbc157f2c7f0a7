//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Documentation links
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use snowwiz::error::SnowwizError;
//!
//! let err = SnowwizError::NoQueryIds {
//!     input: "how big is my warehouse?".to_string(),
//! };
//! assert_eq!(err.exit_code(), 64);
//! assert!(err.suggestion().is_some());
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::advisor::AdvisorError;
use crate::history::HistoryError;

/// Enhanced snowwiz errors with contextual suggestions
#[derive(Error, Debug)]
pub enum SnowwizError {
    /// Query history contained an unusable row
    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    /// Query history could not be read
    #[error(transparent)]
    History(#[from] HistoryError),

    /// No query ids could be found in the input
    #[error("No query ids found in: '{input}'")]
    NoQueryIds {
        /// Text that was searched
        input: String,
    },

    /// The history source returned nothing for the requested ids
    #[error("No query details found for: {}", .ids.join(", "))]
    NoQueryDetails {
        /// Requested ids
        ids: Vec<String>,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound {
        /// Path to config file
        path: PathBuf,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {}: {reason}", .path.display())]
    InvalidConfig {
        /// Path to config file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Unknown output format
    #[error("Unknown report format: '{format}'")]
    InvalidFormat {
        /// Requested format
        format: String,
        /// Accepted formats
        valid: Vec<String>,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SnowwizError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use snowwiz::advisor::AdvisorError;
    /// use snowwiz::error::SnowwizError;
    ///
    /// let err = SnowwizError::from(AdvisorError::UnknownWarehouseSize {
    ///     label: "COMPUTE_WH".to_string(),
    ///     query_id: Some("q1".to_string()),
    /// });
    ///
    /// assert!(err.suggestion().unwrap().contains("XS, S, M, L, XL, 2XL"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Advisor(AdvisorError::UnknownWarehouseSize { .. }) => Some(
                "WAREHOUSE_NAME must be one of: XS, S, M, L, XL, 2XL. Fix the upstream history export"
                    .to_string(),
            ),
            Self::History(HistoryError::FileNotFound { .. }) => Some(
                "Check 'history-file' in .snowwiz.toml, or remove it to use the built-in sample data"
                    .to_string(),
            ),
            Self::History(HistoryError::Io { .. }) => {
                Some("Check that the history file is readable".to_string())
            }
            Self::History(HistoryError::Parse { .. }) => Some(
                "The history file must be a JSON array of rows with QUERY_ID, WAREHOUSE_NAME, EXECUTION_TIME and QUERY_TEXT"
                    .to_string(),
            ),
            Self::NoQueryIds { .. } => Some(
                "Mention one or more query ids, e.g. 'optimize warehouse for query test_abc12345'"
                    .to_string(),
            ),
            Self::NoQueryDetails { .. } => {
                Some("Run 'snowwiz samples' to list the ids available in the sample data".to_string())
            }
            Self::ConfigNotFound { .. } => {
                Some("Run 'snowwiz init' to create a configuration file".to_string())
            }
            Self::InvalidConfig { .. } => Some(
                "Fix the TOML syntax, or delete .snowwiz.toml and run 'snowwiz init'".to_string(),
            ),
            Self::InvalidFormat { valid, .. } => {
                Some(format!("Valid formats: {}", valid.join(", ")))
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::Advisor(_) | Self::History(_) => {
                Some("https://docs.snowflake.com/en/sql-reference/account-usage/query_history")
            }
            Self::ConfigNotFound { .. } | Self::InvalidConfig { .. } => {
                Some("https://github.com/snowwiz/snowwiz#configuration")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use snowwiz::error::SnowwizError;
    ///
    /// let err = SnowwizError::NoQueryDetails { ids: vec!["q1".to_string()] };
    /// assert_eq!(err.exit_code(), 66);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Advisor(_) => 65,                           // EX_DATAERR
            Self::History(HistoryError::FileNotFound { .. }) => 66, // EX_NOINPUT
            Self::History(HistoryError::Io { .. }) => 74,     // EX_IOERR
            Self::History(HistoryError::Parse { .. }) => 65,  // EX_DATAERR
            Self::NoQueryIds { .. } => 64,                    // EX_USAGE
            Self::NoQueryDetails { .. } => 66,                // EX_NOINPUT
            Self::ConfigNotFound { .. } => 66,                // EX_NOINPUT
            Self::InvalidConfig { .. } => 78,                 // EX_CONFIG
            Self::InvalidFormat { .. } => 64,                 // EX_USAGE
            Self::Io { .. } => 74,                            // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(sw_error) = Self::find(error) {
            if let Some(suggestion) = sw_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = sw_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map(SnowwizError::exit_code).unwrap_or(1)
    }

    /// First `SnowwizError` in the chain, looking through added context
    fn find(error: &anyhow::Error) -> Option<&SnowwizError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SnowwizError>())
    }
}
