//! The section registry.

use derive_getters::Getters;
use newsroom_core::{SectionKey, slugify};
use newsroom_error::{NewsroomResult, RenderError, RenderErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slug taken by the front page.
pub const INDEX_SLUG: &str = "index";

/// Display treatment of a section.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Top-of-paper lead section
    #[display("lead")]
    Lead,
    /// Ordinary news section
    #[default]
    #[display("standard")]
    Standard,
    /// Fixed feature, such as the comic strip
    #[display("special")]
    Special,
    /// Arts and reviews
    #[display("review")]
    Review,
    /// Back page; closes the paper
    #[display("terminal")]
    Terminal,
    /// Horoscopes and other predictions
    #[display("mystic")]
    Mystic,
    /// Junior coverage
    #[display("youth")]
    Youth,
    /// Public notices
    #[display("warning")]
    Warning,
    /// Monologue pieces
    #[display("soliloquy")]
    Soliloquy,
    /// Image macros
    #[display("meme")]
    Meme,
}

/// Fixed content rendered for a section instead of its stories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StaticContent {
    /// Heading above the image
    #[serde(default)]
    heading: String,
    /// Image URL
    image: String,
    /// Caption below the image
    #[serde(default)]
    caption: String,
    /// Alternative text for the image
    #[serde(default)]
    alt: String,
}

impl StaticContent {
    /// Create static content.
    pub fn new(
        heading: impl Into<String>,
        image: impl Into<String>,
        caption: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            image: image.into(),
            caption: caption.into(),
            alt: alt.into(),
        }
    }
}

/// Display metadata for one section.
///
/// # Examples
///
/// ```
/// use newsroom_render::{LayoutType, SectionEntryBuilder};
///
/// let entry = SectionEntryBuilder::default()
///     .key("backpage")
///     .display_name("Troppo")
///     .layout(LayoutType::Terminal)
///     .desk(Some("The Back Page".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(entry.slug(), "backpage");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct SectionEntry {
    /// Section key as written on stories
    key: SectionKey,
    /// Heading and navigation label
    #[serde(default)]
    display_name: String,
    /// Display treatment
    #[serde(default)]
    layout: LayoutType,
    /// Desk this section is grouped under
    #[serde(default)]
    desk: Option<String>,
    /// Emit the page even when no story is filed under it
    #[serde(default)]
    always_present: bool,
    /// Render this instead of stories
    #[serde(default)]
    static_content: Option<StaticContent>,
}

impl SectionEntry {
    /// Page and anchor name of this section.
    pub fn slug(&self) -> String {
        self.key.slug()
    }
}

/// Ordered, validated section metadata.
///
/// Entries are ordered by desk (desks in the order they are first declared)
/// and by declaration order within a desk. Every entry slugs to a distinct,
/// non-empty page name other than `index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    /// Validate and order section entries.
    ///
    /// # Errors
    ///
    /// Returns [`RenderErrorKind::SlugCollision`] when two keys normalise to
    /// the same slug, and [`RenderErrorKind::ReservedSlug`] when a key
    /// normalises to nothing or to `index`.
    pub fn new(entries: Vec<SectionEntry>) -> NewsroomResult<Self> {
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        for entry in &entries {
            let slug = entry.slug();
            if slug.is_empty() || slug == INDEX_SLUG {
                return Err(
                    RenderError::new(RenderErrorKind::ReservedSlug(entry.key.to_string())).into(),
                );
            }
            if let Some(first) = seen.get(&slug) {
                return Err(RenderError::new(RenderErrorKind::SlugCollision {
                    first: first.clone(),
                    second: entry.key.to_string(),
                    slug,
                })
                .into());
            }
            seen.insert(slug, entry.key.to_string());
        }

        let mut desks: Vec<Option<String>> = Vec::new();
        for entry in &entries {
            if !desks.contains(&entry.desk) {
                desks.push(entry.desk.clone());
            }
        }
        let mut ordered = Vec::with_capacity(entries.len());
        for desk in &desks {
            ordered.extend(entries.iter().filter(|e| &e.desk == desk).cloned());
        }

        tracing::debug!(sections = ordered.len(), desks = desks.len(), "Built section registry");
        Ok(Self { entries: ordered })
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    /// Look up the entry a key resolves to.
    pub fn get(&self, key: &SectionKey) -> Option<&SectionEntry> {
        let slug = key.slug();
        self.entries.iter().find(|e| e.slug() == slug)
    }

    /// Heading for a section: the registered display name, or the raw key
    /// upper-cased.
    pub fn display_name(&self, key: &SectionKey) -> String {
        self.get(key)
            .map(|e| e.display_name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| key.as_str().trim().to_uppercase())
    }

    /// Display treatment for a section.
    pub fn layout(&self, key: &SectionKey) -> LayoutType {
        self.get(key).map(|e| e.layout).unwrap_or_default()
    }

    /// Whether a page slug is taken by the front page or cannot name a file.
    pub fn is_reserved(slug: &str) -> bool {
        slug.is_empty() || slug == INDEX_SLUG
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn entry(key: &str, desk: Option<&str>) -> SectionEntry {
        SectionEntryBuilder::default()
            .key(key)
            .display_name(key.to_uppercase())
            .desk(desk.map(str::to_string))
            .build()
            .unwrap()
    }

    #[test]
    fn test_entries_grouped_by_first_declared_desk() {
        let registry = SectionRegistry::new(vec![
            entry("masthead", Some("front")),
            entry("news", Some("local")),
            entry("campaign", Some("front")),
            entry("sport", None),
            entry("letters", Some("local")),
        ])
        .unwrap();

        let keys: Vec<&str> = registry.entries().iter().map(|e| e.key().as_str()).collect();
        assert_eq!(keys, ["masthead", "campaign", "news", "letters", "sport"]);
    }

    #[test]
    fn test_slug_collision_rejected() {
        let err = SectionRegistry::new(vec![entry("Troppo News", None), entry("troppo-news", None)])
            .unwrap_err();
        assert!(err.to_string().contains("troppo-news"));
    }

    #[test]
    fn test_index_reserved() {
        assert!(SectionRegistry::new(vec![entry("Index", None)]).is_err());
        assert!(SectionRegistry::new(vec![entry("!!!", None)]).is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_upper_key() {
        let registry = SectionRegistry::new(vec![entry("news", None)]).unwrap();
        assert_eq!(registry.display_name(&SectionKey::from("NEWS")), "NEWS");
        assert_eq!(registry.display_name(&SectionKey::from("weather")), "WEATHER");
        assert_eq!(registry.layout(&SectionKey::from("weather")), LayoutType::Standard);
    }

    #[test]
    fn test_layout_class_names_match_config_names() {
        for layout in LayoutType::iter() {
            let json = serde_json::to_string(&layout).unwrap();
            assert_eq!(json, format!("\"{}\"", layout));
        }
    }
}
