//! CLI error type.

use bluechip::data::DataError;
use bluechip::output::ExportError;
use bluechip::{ScreenError, WatchlistError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end the process with exit code 1.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Screening setup failure
    #[error(transparent)]
    Screen(#[from] ScreenError),

    /// Criteria file could not be read
    #[error("failed to read criteria file '{}': {source}", path.display())]
    CriteriaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Criteria file is not valid JSON
    #[error("invalid criteria file '{}': {source}", path.display())]
    CriteriaParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Offline data file could not be loaded
    #[error("failed to load data file: {0}")]
    DataFile(#[from] DataError),

    /// Terminal prompt failure
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Shorthand for a configuration error.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Screen(ScreenError::Configuration(message.into()))
    }
}

impl From<WatchlistError> for CliError {
    fn from(err: WatchlistError) -> Self {
        Self::Screen(err.into())
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        Self::Screen(err.into())
    }
}

/// Result alias for the CLI.
pub(crate) type Result<T> = std::result::Result<T, CliError>;
