//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unsupported display currency.
    #[error("Unsupported currency: {0}. Use one of {1}.")]
    InvalidCurrency(String, String),

    /// `eval` was given neither inline JSON nor a file.
    #[error("Missing request: pass inline JSON or --file PATH")]
    MissingRequest,

    /// The request could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Refused to overwrite an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// No configuration path could be determined.
    #[error("Could not determine a configuration path on this platform")]
    NoConfigPath,

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] fincalc_config::ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
