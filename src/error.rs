//! Error types for pybootstrap operations.
//!
//! This module defines [`BootstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BootstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors
//! - Every error is fatal at the process level; `main` reports it and exits
//!   with [`BootstrapError::exit_code`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pybootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A required executable could not be resolved on the search path.
    #[error("required executable '{name}' not found on PATH")]
    MissingExecutable { name: String },

    /// A step of the delegated setup action failed.
    #[error("setup step '{step}' failed with exit code {code:?}: {command}")]
    DelegatedActionFailure {
        step: String,
        command: String,
        code: Option<i32>,
    },

    /// The requested action is not registered.
    #[error("unknown action '{name}' (available: {available})")]
    UnknownAction { name: String, available: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A version string did not match the expected format.
    #[error("Invalid version: {version}")]
    InvalidVersion { version: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    /// Process exit code for this error.
    ///
    /// A failed setup step hands its own exit code back unchanged. A step
    /// killed by a signal has no code and maps to 1, like every other error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DelegatedActionFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Result type alias for pybootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
