//! Domain value objects: the set of file extensions a run targets.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Extension used when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = "md";

// ── TargetExtension ──────────────────────────────────────────────────────────

/// A single file extension, stored lowercase and without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetExtension(String);

impl TargetExtension {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive check against the end of the file name.
    ///
    /// Compares raw bytes, so names that are not valid UTF-8 still match.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.as_encoded_bytes();
        let ext = self.0.as_bytes();
        if name.len() <= ext.len() {
            return false;
        }
        let (head, tail) = name.split_at(name.len() - ext.len());
        head.last() == Some(&b'.') && tail.eq_ignore_ascii_case(ext)
    }
}

impl Default for TargetExtension {
    fn default() -> Self {
        Self(DEFAULT_EXTENSION.to_string())
    }
}

impl FromStr for TargetExtension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.trim().trim_start_matches('.');
        if ext.is_empty() {
            return Err(DomainError::InvalidExtension {
                extension: s.to_string(),
                reason: "extension cannot be empty".into(),
            });
        }
        if ext.contains(['/', '\\', '*', '?']) {
            return Err(DomainError::InvalidExtension {
                extension: s.to_string(),
                reason: "extension must be a plain suffix, not a path or glob".into(),
            });
        }
        Ok(Self(ext.to_ascii_lowercase()))
    }
}

impl fmt::Display for TargetExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.0)
    }
}

// ── TargetExtensions ─────────────────────────────────────────────────────────

/// Non-empty set of extensions; a file is a target if any of them matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetExtensions(Vec<TargetExtension>);

impl TargetExtensions {
    pub fn new(extensions: Vec<TargetExtension>) -> Result<Self, DomainError> {
        if extensions.is_empty() {
            return Err(DomainError::InvalidExtension {
                extension: String::new(),
                reason: "at least one target extension is required".into(),
            });
        }
        let mut unique: Vec<TargetExtension> = Vec::with_capacity(extensions.len());
        for ext in extensions {
            if !unique.contains(&ext) {
                unique.push(ext);
            }
        }
        Ok(Self(unique))
    }

    /// Parse a list of raw extension strings such as `["md", ".MDX"]`.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, DomainError> {
        let parsed = raw
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.0.iter().any(|ext| ext.matches(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetExtension> {
        self.0.iter()
    }
}

impl Default for TargetExtensions {
    fn default() -> Self {
        Self(vec![TargetExtension::default()])
    }
}

impl fmt::Display for TargetExtensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}
