//! Error types for benchkit
//!
//! Missing result data is never an error in this system: absent files and
//! directories surface as empty series. The variants below cover invocation
//! problems and failures while writing the report.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for benchkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for benchkit
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (report directory creation, chart writes, etc.)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Settings file could not be read or parsed
    #[error("Config error in '{path}': {message}")]
    Config {
        /// Path of the offending settings file
        path: PathBuf,
        /// Parser or validation message
        message: String,
    },

    /// A requested configuration does not exist in the results tree
    #[error("Unknown configuration '{name}' (available: {available})")]
    InvalidConfiguration {
        /// The name as given on the command line
        name: String,
        /// Comma-separated list of discovered configurations
        available: String,
    },

    /// Nothing to compare
    #[error("No configurations found under {0}")]
    NoConfigurations(PathBuf),

    /// Invalid argument or settings value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A `size_<min>-<max>` name could not be parsed
    #[error("Invalid size range '{0}'")]
    SizeRange(String),

    /// Chart backend failure
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Error::Render(message.into())
    }
}
