//! Writer roster.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name used for stories whose writer is not on the roster.
pub const STAFF_NAME: &str = "Staff";

/// A roster entry describing one persona.
///
/// Only `name`, `title` and `image` affect rendering; the remaining fields
/// are consumed by prompt assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WriterEntry {
    /// Byline name
    #[serde(default = "default_name")]
    name: String,
    /// Byline title
    #[serde(default)]
    title: String,
    /// Portrait URL or path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    /// Species of the persona
    #[serde(default, skip_serializing_if = "Option::is_none")]
    species: Option<String>,
    /// Writing voice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    voice: Option<String>,
    /// Newsroom role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

fn default_name() -> String {
    STAFF_NAME.to_string()
}

impl WriterEntry {
    /// Create an entry with the rendering fields set.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            image,
            ..Self::default()
        }
    }
}

/// Writers keyed by lowercased writer key.
///
/// # Examples
///
/// ```
/// use newsroom_core::WriterRoster;
///
/// let roster: WriterRoster = serde_json::from_str(
///     r#"{ "Dazza": { "name": "Dazza", "title": "Northern Correspondent" } }"#,
/// ).unwrap();
///
/// assert!(roster.get("dazza").is_some());
/// assert!(roster.get("DAZZA").is_some());
/// assert!(roster.get("Remy").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, WriterEntry>")]
pub struct WriterRoster {
    entries: BTreeMap<String, WriterEntry>,
}

impl WriterRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: &str, entry: WriterEntry) {
        self.entries.insert(key.to_lowercase(), entry);
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&WriterEntry> {
        self.entries.get(&key.to_lowercase())
    }

    /// Number of writers on the roster.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, WriterEntry>> for WriterRoster {
    fn from(map: BTreeMap<String, WriterEntry>) -> Self {
        let mut roster = Self::new();
        for (key, entry) in map {
            roster.insert(&key, entry);
        }
        roster
    }
}
