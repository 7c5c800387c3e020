//! Error types for the toolbox
//!
//! Provides structured error handling with proper error chains.

use thiserror::Error;

/// Main error type for the toolbox
#[derive(Error, Debug)]
pub enum DevkitError {
    /// A required command option is missing or unusable
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A command name could not be resolved in the registry
    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    /// The command registry rejected a registration
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// Writing to the output sink failed
    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl DevkitError {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a new registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a new output error
    pub fn output(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            message: message.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DevkitError>;
