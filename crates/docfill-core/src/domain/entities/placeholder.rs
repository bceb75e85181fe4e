//! Bracketed placeholder tokens and literal substitution.
//!
//! A placeholder is the literal text `[KEY]`. Matching is exact substring
//! matching on the bracketed form, so `[NODE]` never matches inside
//! `[NODE_VERSION]` and keys containing regex metacharacters are plain text.

use std::fmt;

use crate::domain::entities::config_map::ConfigMap;

/// The bracketed token for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder(String);

impl Placeholder {
    pub fn new(key: &str) -> Self {
        Self(format!("[{key}]"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-overlapping occurrences of this token in `content`.
    pub fn count_in(&self, content: &str) -> usize {
        content.matches(self.0.as_str()).count()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of substituting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub replacements: usize,
}

impl Substitution {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Replace every `[KEY]` in `content` with its value.
///
/// Occurrences are counted against the original content, before any
/// substitution runs. Replacement then proceeds key by key in map order.
pub fn apply_replacements(content: &str, map: &ConfigMap) -> Substitution {
    let mut replacements = 0;
    let mut result = content.to_string();

    let tokens: Vec<(Placeholder, &str)> = map
        .iter()
        .map(|entry| (Placeholder::new(&entry.key), entry.value.as_str()))
        .collect();

    for (token, _) in &tokens {
        replacements += token.count_in(content);
    }

    if replacements == 0 {
        return Substitution {
            content: result,
            replacements,
        };
    }

    for (token, value) in &tokens {
        if result.contains(token.as_str()) {
            result = result.replace(token.as_str(), value);
        }
    }

    Substitution {
        content: result,
        replacements,
    }
}
