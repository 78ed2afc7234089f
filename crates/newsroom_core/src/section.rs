//! Section keys and slugging.

use serde::{Deserialize, Serialize};

/// Raw section key as written on a story record (e.g. `"backpage"`, `"Troppo News"`).
///
/// Keys compare by their raw text; use [`SectionKey::slug`] to obtain the
/// normalised identifier used for page names and navigation anchors.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    /// Create a key from raw text.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Normalised lowercase identifier for this key.
    pub fn slug(&self) -> String {
        slugify(&self.0)
    }

    /// Whether two keys name the same section once normalised.
    pub fn same_section(&self, other: &SectionKey) -> bool {
        self.slug() == other.slug()
    }
}

impl From<&str> for SectionKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Normalise a section key into a lowercase slug.
///
/// Alphanumeric characters are lowercased; every run of other characters
/// becomes a single `-`; leading and trailing separators are dropped.
///
/// # Examples
///
/// ```
/// use newsroom_core::slugify;
///
/// assert_eq!(slugify("Troppo News"), "troppo-news");
/// assert_eq!(slugify("  troppo   news "), "troppo-news");
/// assert_eq!(slugify("pitd"), "pitd");
/// ```
pub fn slugify(key: &str) -> String {
    let mut slug = String::with_capacity(key.len());
    let mut pending_separator = false;
    for ch in key.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_spacing_collapse_to_same_slug() {
        assert_eq!(slugify("Troppo News"), slugify("troppo news"));
        assert_eq!(slugify("Troppo_News!"), "troppo-news");
    }

    #[test]
    fn test_empty_and_symbol_only_keys() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_same_section() {
        let a = SectionKey::new("Local News");
        let b = SectionKey::from("local-news");
        assert!(a.same_section(&b));
        assert_ne!(a, b);
    }
}
