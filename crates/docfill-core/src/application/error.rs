//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not domain
//! rules. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading values or rewriting files.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The `KEY=VALUE` file does not exist.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The scan root does not exist (or is not a directory).
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A file could not be read as UTF-8 text.
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    /// A file could not be written back.
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// Directory traversal or another filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => vec![
                format!("No values file at: {}", path.display()),
                "Create it with one KEY=VALUE pair per line".into(),
                "Or point to another file with --env-file <FILE>".into(),
            ],
            Self::DirectoryNotFound { path } => vec![
                format!("No directory at: {}", path.display()),
                "Check the ROOT argument (defaults to the current directory)".into(),
            ],
            Self::FileRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file is readable and UTF-8 encoded".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no other process holds the file open".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check directory permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } | Self::DirectoryNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// The underlying reason, without the path prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::FileRead { reason, .. }
            | Self::FileWrite { reason, .. }
            | Self::FilesystemError { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}
