//! Core domain layer for docfill.
//!
//! Pure logic only: parsing `KEY=VALUE` text, substituting `[KEY]` tokens,
//! and folding per-file results into a run summary. All I/O goes through
//! the ports in `crate::application`.
//!
//! - **No I/O**: no filesystem or network calls
//! - **No async**: everything is synchronous
//! - **Immutable inputs**: a `ConfigMap` is never mutated once a run starts

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    ConfigEntry, ConfigMap, FileOutcome, FileReport, Placeholder, RunSummary, Substitution,
    apply_replacements,
};

pub use error::DomainError;

pub use value_objects::{DEFAULT_EXTENSION, TargetExtension, TargetExtensions};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    // ========================================================================
    // End-to-end over pure domain pieces
    // ========================================================================

    #[test]
    fn parsed_values_feed_substitution() {
        let map = ConfigMap::parse(
            "# versions\nPHP_VERSION=8.2\nFRAMEWORK=\"Laravel\"\n\nNODE_VERSION='20'\n",
        );
        let out = apply_replacements("[FRAMEWORK] on PHP [PHP_VERSION], node [NODE_VERSION]", &map);
        assert_eq!(out.content, "Laravel on PHP 8.2, node 20");
        assert_eq!(out.replacements, 3);
    }

    #[test]
    fn comment_only_values_change_nothing() {
        let map = ConfigMap::parse("# nothing here\n\n# still nothing\n");
        let out = apply_replacements("[ANY] [KEY]", &map);
        assert_eq!(out.replacements, 0);
        assert_eq!(out.content, "[ANY] [KEY]");
    }

    #[test]
    fn duplicate_key_uses_last_value() {
        let map = ConfigMap::parse("APP=first\nAPP=second\n");
        let out = apply_replacements("[APP]", &map);
        assert_eq!(out.content, "second");
    }

    #[test]
    fn error_categories() {
        let err = DomainError::InvalidExtension {
            extension: "".into(),
            reason: "empty".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
