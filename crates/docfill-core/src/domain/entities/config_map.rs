//! The substitution values loaded from a `KEY=VALUE` file.
//!
//! ```text
//! # comment            → skipped
//!                      → skipped (blank)
//! APP_NAME="My App"    → APP_NAME = My App
//! DSN=mysql://u:p@h/db?x=1
//!                      → DSN = mysql://u:p@h/db?x=1   (split on first '=')
//! NO_EQUALS_HERE       → skipped
//! ```
//!
//! Keys are case-sensitive and unique. A later duplicate overwrites the value
//! but keeps the key's original position, so iteration order is stable.

use std::collections::HashMap;

use serde::Serialize;

/// A single `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse one line of a values file.
    ///
    /// Returns `None` for blank lines, `#` comments and lines without `=`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let (key, value) = trimmed.split_once('=')?;
        Some(Self::new(key.trim(), strip_quotes(value.trim())))
    }
}

/// Strip one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Insertion-ordered mapping of placeholder keys to replacement values.
///
/// Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: Vec<ConfigEntry>,
    index: HashMap<String, usize>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the full text of a values file.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut map = Self::new();
        for entry in text.lines().filter_map(ConfigEntry::parse_line) {
            map.insert(entry.key, entry.value);
        }
        map
    }

    /// Insert a value, overwriting any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].value = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(ConfigEntry { key, value });
            }
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = &'a ConfigEntry;
    type IntoIter = std::slice::Iter<'a, ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_quotes_are_stripped() {
        let map = ConfigMap::parse("NAME=\"My App\"");
        assert_eq!(map.get("NAME"), Some("My App"));
    }

    #[test]
    fn single_quotes_are_stripped() {
        let map = ConfigMap::parse("NAME='My App'");
        assert_eq!(map.get("NAME"), Some("My App"));
    }

    #[test]
    fn only_one_layer_of_quotes_is_stripped() {
        let map = ConfigMap::parse("NAME=\"'quoted'\"");
        assert_eq!(map.get("NAME"), Some("'quoted'"));
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        let map = ConfigMap::parse("A=\"half\nB='mixed\"");
        assert_eq!(map.get("A"), Some("\"half"));
        assert_eq!(map.get("B"), Some("'mixed\""));
    }

    #[test]
    fn lone_quote_is_not_stripped() {
        let map = ConfigMap::parse("Q=\"");
        assert_eq!(map.get("Q"), Some("\""));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let map = ConfigMap::parse("DSN=mysql://host/db?charset=utf8&x=1");
        assert_eq!(map.get("DSN"), Some("mysql://host/db?charset=utf8&x=1"));
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let map = ConfigMap::parse("  PHP_VERSION  =   8.2   ");
        assert_eq!(map.get("PHP_VERSION"), Some("8.2"));
    }

    #[test]
    fn comments_and_blank_lines_yield_empty_map() {
        let map = ConfigMap::parse("# header\n\n   \n   # indented comment\n");
        assert!(map.is_empty());
    }

    #[test]
    fn lines_without_equals_are_skipped() {
        let map = ConfigMap::parse("JUST_A_WORD\nA=1");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some("1"));
    }

    #[test]
    fn last_duplicate_wins_and_keeps_position() {
        let map = ConfigMap::parse("A=1\nB=2\nA=3");
        assert_eq!(map.get("A"), Some("3"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let map = ConfigMap::parse("name=lower\nNAME=upper");
        assert_eq!(map.get("name"), Some("lower"));
        assert_eq!(map.get("NAME"), Some("upper"));
    }

    #[test]
    fn any_text_left_of_equals_is_a_key() {
        let map = ConfigMap::parse("=empty\nweird key.*=x");
        assert_eq!(map.get(""), Some("empty"));
        assert_eq!(map.get("weird key.*"), Some("x"));
    }

    #[test]
    fn empty_value_is_kept() {
        let map = ConfigMap::parse("EMPTY=\nQUOTED=\"\"");
        assert_eq!(map.get("EMPTY"), Some(""));
        assert_eq!(map.get("QUOTED"), Some(""));
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let map = ConfigMap::parse("A=1\r\nB=\"two\"\r\n");
        assert_eq!(map.get("A"), Some("1"));
        assert_eq!(map.get("B"), Some("two"));
    }

    #[test]
    fn leading_bom_is_not_part_of_first_key() {
        let map = ConfigMap::parse("\u{feff}PHP_VERSION=8.2\nFRAMEWORK=Laravel\n");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["PHP_VERSION", "FRAMEWORK"]);
        assert_eq!(map.get("PHP_VERSION"), Some("8.2"));
    }

    #[test]
    fn from_iterator_collects_in_order() {
        let map: ConfigMap = [("X", "1"), ("Y", "2")].into_iter().collect();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["X", "Y"]);
    }
}
