//! Error types for the promptcraft CLI.
//!
//! Composition itself cannot fail; these errors only come from the
//! surrounding command layer (argument handling, config files, output).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptcraft operations.
#[derive(Error, Debug)]
pub enum PromptcraftError {
    /// User provided invalid arguments or an unreadable prompt source.
    #[error("{0}")]
    UserError(String),

    /// The config file could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Writing output or the event log failed.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl PromptcraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptcraftError::UserError(_) => exit_codes::USER_ERROR,
            PromptcraftError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PromptcraftError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptcraft operations.
pub type Result<T> = std::result::Result<T, PromptcraftError>;
