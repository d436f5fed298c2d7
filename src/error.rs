//! Error types for vup operations.
//!
//! This module defines [`VupError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VupError` for domain errors that map to a distinct exit code
//! - Use `anyhow::Error` (via `VupError::Other`) for unexpected errors
//! - Messages are short sentences; they are printed once to stderr

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vup operations.
#[derive(Debug, Error)]
pub enum VupError {
    /// Path does not exist on disk.
    #[error("{path}: not found")]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("{path}: not a directory")]
    NotADirectory { path: PathBuf },

    /// Directory exists but has no `bin/activate` regular file.
    #[error("{path}: missing bin/activate")]
    MissingActivateScript { path: PathBuf },

    /// Target of `init` or `new` already exists.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// `new` was run in a root without a `.venv` container.
    #[error("No .venv directory in {root}. Run 'vup init' first.")]
    ContainerMissing { root: PathBuf },

    /// Creating a container or a venv failed.
    #[error("Failed to create {path}: {message}")]
    CreationError { path: PathBuf, message: String },

    /// No search root holds a venv with this name.
    #[error("venv '{name}' not found")]
    VenvNotFound { name: String },

    /// Failed to parse the user configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vup operations.
pub type Result<T> = std::result::Result<T, VupError>;
