//! Unified error handling for docfill core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for docfill core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocfillError {
    /// Errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading, scanning, rewriting).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DocfillError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in docfill".into(),
                "Please report this issue at: https://github.com/cosecruz/docfill/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type DocfillResult<T> = Result<T, DocfillError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_inputs_are_not_found() {
        let err: DocfillError = ApplicationError::ConfigNotFound {
            path: PathBuf::from(".env"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "Config file not found: .env");

        let err: DocfillError = ApplicationError::DirectoryNotFound {
            path: PathBuf::from("docs"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn io_failures_are_internal() {
        let err: DocfillError = ApplicationError::FileWrite {
            path: PathBuf::from("a.md"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("a.md")));
    }

    #[test]
    fn extension_errors_are_validation() {
        let err: DocfillError = DomainError::InvalidExtension {
            extension: "*".into(),
            reason: "glob".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn lock_failures_are_internal_bugs() {
        let err = DocfillError::Internal {
            message: "lock poisoned".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("This is a bug"));
    }
}
