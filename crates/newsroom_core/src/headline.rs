//! Scraped headline records.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One candidate headline from the headline source.
///
/// Scraper output carries both `title` and `clean_title`, and may name the
/// other fields `link`, `source_query`, `published` or `crazy_score`. The
/// cleaned title wins when both are present.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(from = "HeadlineWire")]
#[builder(setter(into), default)]
pub struct Headline {
    /// Headline text
    title: String,
    /// Link to the original story
    url: String,
    /// Publisher or search query that produced it
    source: String,
    /// Publication timestamp as reported by the feed
    published_at: String,
    /// Ranking score; higher is stranger
    score: u32,
}

impl Headline {
    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the score.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[derive(Deserialize)]
struct HeadlineWire {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    clean_title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    source_query: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default, rename = "publishedAt")]
    published_at_camel: Option<String>,
    #[serde(default)]
    published: Option<String>,
    #[serde(default)]
    score: Option<u32>,
    #[serde(default)]
    crazy_score: Option<u32>,
}

impl From<HeadlineWire> for Headline {
    fn from(wire: HeadlineWire) -> Self {
        let title = wire
            .clean_title
            .filter(|t| !t.trim().is_empty())
            .or(wire.title)
            .unwrap_or_default();
        Self {
            title,
            url: wire.url.or(wire.link).unwrap_or_default(),
            source: wire.source.or(wire.source_query).unwrap_or_default(),
            published_at: wire
                .published_at
                .or(wire.published_at_camel)
                .or(wire.published)
                .unwrap_or_default(),
            score: wire.score.or(wire.crazy_score).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_record_prefers_clean_title() {
        let headline: Headline = serde_json::from_str(
            r#"{"source_query":"Cairns Post","title":"Croc eats esky - Cairns Post",
                "link":"u","published":"Mon","clean_title":"Croc eats esky","crazy_score":1}"#,
        )
        .unwrap();

        assert_eq!(headline.title(), "Croc eats esky");
        assert_eq!(headline.url(), "u");
        assert_eq!(headline.source(), "Cairns Post");
        assert_eq!(headline.published_at(), "Mon");
        assert_eq!(*headline.score(), 1);
    }

    #[test]
    fn test_serialized_headline_reads_back() {
        let headline = HeadlineBuilder::default()
            .title("Bin chicken steals pie")
            .url("https://example.test/ibis")
            .score(3u32)
            .build()
            .unwrap();

        let json = serde_json::to_string(&headline).unwrap();
        let back: Headline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, headline);
    }
}
