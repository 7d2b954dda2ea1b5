//! Error types for the settings crate.
//!
//! Covers reading and writing project files, parsing profile coordinate
//! files and validating the loaded values.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use wingloft_core::LoftError;

/// Errors that can occur while loading or saving project data.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported project format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A profile coordinate file has a malformed line.
    #[error("{origin}:{line}: {reason}")]
    ProfileParse {
        origin: String,
        line: usize,
        reason: String,
    },

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The loft configuration failed validation.
    #[error("Loft error: {0}")]
    Loft(#[from] LoftError),
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
