//! Core data model: key/value records, per-section key lists and the section table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the implicit section holding keys that appear before any header
pub const DEFAULT_SECTION: &str = "";

/// A single configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    #[serde(rename = "k")]
    pub name: String,
    #[serde(rename = "v")]
    pub value: String,
}

impl Key {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Keys of one section in order of first occurrence
pub type KeySlice = Vec<Key>;

/// Stable sort of a key list by the first character of each key name.
///
/// Keys sharing a first character keep their recorded order.
pub fn sort_keys_by_first_char(keys: &mut KeySlice) {
    keys.sort_by_key(|key| key.name.chars().next());
}

/// Mapping from section name to its keys
///
/// The default section is stored under [`DEFAULT_SECTION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: HashMap<String, KeySlice>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default section entry if it is absent.
    pub fn ensure_default(&mut self) {
        self.sections
            .entry(DEFAULT_SECTION.to_string())
            .or_default();
    }

    /// Start a section with an empty key list, replacing any prior content for that name.
    pub fn insert_section(&mut self, name: impl Into<String>) {
        self.sections.insert(name.into(), KeySlice::new());
    }

    /// Append a key to a section unless the key is empty or already present.
    ///
    /// Returns `true` when the key was recorded.
    pub fn push_key(&mut self, section: &str, key: Key) -> bool {
        let keys = self.sections.entry(section.to_string()).or_default();
        if key.name.is_empty() || keys.iter().any(|k| k.name == key.name) {
            return false;
        }
        keys.push(key);
        true
    }

    pub fn get(&self, section: &str) -> Option<&KeySlice> {
        self.sections.get(section)
    }

    /// Value of `key` in `section`, or an empty string when either is absent.
    pub fn section_get(&self, section: &str, key: &str) -> &str {
        self.find(section, key).map(|k| k.value.as_str()).unwrap_or("")
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.find(section, key).is_some()
    }

    /// All named sections, sorted; the default section is never included.
    pub fn section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .sections
            .keys()
            .filter(|name| name.as_str() != DEFAULT_SECTION)
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &KeySlice)> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn find(&self, section: &str, key: &str) -> Option<&Key> {
        self.sections
            .get(section)
            .and_then(|keys| keys.iter().find(|k| k.name == key))
    }
}

impl From<HashMap<String, KeySlice>> for SectionMap {
    fn from(sections: HashMap<String, KeySlice>) -> Self {
        Self { sections }
    }
}
