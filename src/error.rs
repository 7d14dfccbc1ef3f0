//! Error types for degreegap operations.
//!
//! This module defines [`DegreeGapError`], the error type used by the
//! configuration, data loading, and CLI layers, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - The evaluation engine never returns errors: missing data resolves to
//!   documented defaults, malformed input to "no match"
//! - Use `DegreeGapError` for failures that need distinct handling when
//!   loading configuration and data files
//! - Use `anyhow::Error` (via `DegreeGapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for degreegap operations.
#[derive(Debug, Error)]
pub enum DegreeGapError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A required data file (catalog, programs) does not exist.
    #[error("Data file not found: {path}")]
    DataNotFound { path: PathBuf },

    /// A data file exists but is not valid JSON of the expected shape.
    #[error("Failed to parse data file {path}: {message}")]
    DataParseError { path: PathBuf, message: String },

    /// Requested program id is not in the loaded program list.
    #[error("Unknown program: {id}")]
    UnknownProgram { id: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for degreegap operations.
pub type Result<T> = std::result::Result<T, DegreeGapError>;
