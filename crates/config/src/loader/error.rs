//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for `.env` load failures and validation failures.
//!
//! Invariants:
//! - Load errors carry the path that failed so the operator can find it.
//! - Load errors NEVER include raw .env line contents to prevent secret leakage.
//! - A missing `.env` file is not an error (see `dotenv.rs`).

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Field;

/// Failure to read or parse an existing `.env` file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file has invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, NOT the offending
    /// line content.
    #[error("Failed to parse .env file at {path} (position {error_index})")]
    Parse { path: PathBuf, error_index: usize },

    /// The file exists but could not be read.
    #[error("Failed to read .env file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file at {path}")]
    Unknown { path: PathBuf },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Parse { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::Unknown { path } => path,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Missing required configuration value: {field} ({})", .field.display_name())]
    MissingRequiredField { field: Field },
}

impl ConfigError {
    /// The missing field, if this is a validation failure.
    pub fn missing_field(&self) -> Option<Field> {
        match self {
            ConfigError::MissingRequiredField { field } => Some(*field),
            ConfigError::Load(_) => None,
        }
    }
}
