//! Published story records.

use crate::serde_util::{blank_as_none, null_as_default};
use crate::{SectionKey, StoryFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One published story as held by the content store.
///
/// `headline`, `body` and `section` must be non-empty once a record is
/// published; [`StoryRecord::validate`] checks this so that callers can skip a
/// bad record without failing the whole run. `image` stays `None` until an
/// illustration has been approved, possibly forever.
///
/// Fields the pipeline does not know about are kept in `extra` so the store can
/// be rewritten wholesale without losing data.
///
/// # Examples
///
/// ```
/// use newsroom_core::{StoryFormat, StoryRecordBuilder};
///
/// let story = StoryRecordBuilder::default()
///     .section("backpage")
///     .writer_key(Some("Dazza".to_string()))
///     .headline("Croc Wins Council Seat")
///     .body("It was always going to be close.\nThe croc had the numbers.")
///     .build()
///     .unwrap();
///
/// assert_eq!(*story.format(), StoryFormat::Standard);
/// assert!(story.image().is_none());
/// assert!(story.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct StoryRecord {
    /// Section this story is filed under
    #[serde(default, deserialize_with = "null_as_default")]
    section: SectionKey,

    /// Roster key of the writer; looked up case-insensitively
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    writer_key: Option<String>,

    /// Story headline (meme "top text")
    #[serde(default, deserialize_with = "null_as_default")]
    headline: String,

    /// Story body; newlines are paragraph breaks
    #[serde(default, deserialize_with = "null_as_default")]
    body: String,

    /// Secondary line (meme "bottom text")
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    subtext: Option<String>,

    /// Illustration scene description for the image generator
    #[serde(
        default,
        alias = "image_prompt",
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    visual_prompt: Option<String>,

    /// Rendering branch
    #[serde(default)]
    format: StoryFormat,

    /// Also shown on the front page
    #[serde(default, deserialize_with = "null_as_default")]
    featured: bool,

    /// Illustration path or URL, once approved
    #[serde(default, deserialize_with = "blank_as_none")]
    image: Option<String>,

    /// Fields carried through untouched
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl StoryRecord {
    /// Checks the fields that must be present on a published story.
    ///
    /// # Errors
    ///
    /// Returns the name of the first missing field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.section.is_blank() {
            return Err("section");
        }
        if self.headline.trim().is_empty() {
            return Err("headline");
        }
        if self.body.trim().is_empty() {
            return Err("body");
        }
        Ok(())
    }

    /// Whether this story still needs an illustration.
    pub fn needs_image(&self) -> bool {
        self.image.is_none()
    }

    /// Attach an approved illustration.
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = Some(image.into());
    }

    /// Promote to, or withdraw from, the front page.
    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    /// Subtext, or an empty string.
    pub fn subtext_or_empty(&self) -> &str {
        self.subtext.as_deref().unwrap_or("")
    }
}
