//! Structured output of the text generator.

use crate::serde_util::{blank_as_none, null_as_default};
use crate::{SectionKey, StoryFormat, StoryRecord, StoryRecordBuilder};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Article as returned by the text generator.
///
/// This is the fixed output schema requested from the model: `headline`,
/// `body`, `visual_prompt`, `subtext`, `format` and `featured`.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct ArticleDraft {
    /// Satirical headline
    #[serde(default, deserialize_with = "null_as_default")]
    headline: String,
    /// Story text
    #[serde(default, deserialize_with = "null_as_default")]
    body: String,
    /// Scene for the illustrator
    #[serde(default, alias = "image_prompt", deserialize_with = "blank_as_none")]
    visual_prompt: Option<String>,
    /// Secondary line
    #[serde(default, deserialize_with = "blank_as_none")]
    subtext: Option<String>,
    /// Requested layout
    #[serde(default)]
    format: StoryFormat,
    /// Front page promotion
    #[serde(default, deserialize_with = "null_as_default")]
    featured: bool,
}

impl ArticleDraft {
    /// Stand-in used when generation fails, so the gap is visible on the page.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsroom_core::ArticleDraft;
    ///
    /// let draft = ArticleDraft::placeholder("Swoop", "Australian Magpie");
    /// assert_eq!(draft.headline(), "Writer Swoop is Napping");
    /// ```
    pub fn placeholder(persona: &str, species: &str) -> Self {
        Self {
            headline: format!("Writer {} is Napping", persona),
            body: "Content could not be generated. The writer is currently chasing a ball."
                .to_string(),
            visual_prompt: Some(format!("Sleeping {}", species)),
            ..Self::default()
        }
    }

    /// Whether the draft carries the fields a published story needs.
    pub fn is_complete(&self) -> bool {
        !self.headline.trim().is_empty() && !self.body.trim().is_empty()
    }

    /// File this draft as a story record. The image starts empty.
    pub fn into_story(self, section: SectionKey, writer_key: &str) -> StoryRecord {
        StoryRecordBuilder::default()
            .section(section)
            .writer_key(Some(writer_key.to_string()))
            .headline(self.headline)
            .body(self.body)
            .subtext(self.subtext)
            .visual_prompt(self.visual_prompt)
            .format(self.format)
            .featured(self.featured)
            .build()
            .unwrap_or_default()
    }
}
