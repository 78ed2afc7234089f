//! Story layout formats.

use serde::{Deserialize, Deserializer, Serialize};

/// Layout variant selecting the rendering branch for a story.
///
/// Unknown or absent values resolve to [`StoryFormat::Standard`].
///
/// # Examples
///
/// ```
/// use newsroom_core::StoryFormat;
///
/// let format: StoryFormat = serde_json::from_str("\"interpretive-dance\"").unwrap();
/// assert_eq!(format, StoryFormat::Standard);
/// assert_eq!(StoryFormat::Meme.to_string(), "meme");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StoryFormat {
    /// Headline, writer block, optional illustration, prose body
    #[default]
    #[display("standard")]
    Standard,
    /// Writer portrait over a speech box holding the verbatim body
    #[display("soliloquy")]
    Soliloquy,
    /// Headline and subtext overlaid on the illustration
    #[display("meme")]
    Meme,
    /// Two-voice piece; renders as standard
    #[display("debate")]
    Debate,
}

impl StoryFormat {
    /// Parse a format name, falling back to `Standard` for anything unrecognised.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "soliloquy" => StoryFormat::Soliloquy,
            "meme" => StoryFormat::Meme,
            "debate" => StoryFormat::Debate,
            _ => StoryFormat::Standard,
        }
    }
}

impl<'de> Deserialize<'de> for StoryFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .map(StoryFormat::parse_lenient)
            .unwrap_or_default())
    }
}
