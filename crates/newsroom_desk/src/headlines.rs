//! Headline gathering and ranking.

use async_trait::async_trait;
use derive_getters::Getters;
use newsroom_core::Headline;
use newsroom_error::{GenerationError, GenerationErrorKind, NewsroomResult};
use newsroom_interface::HeadlineSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Scoring and filtering rules for candidate headlines.
///
/// # Examples
///
/// ```
/// use newsroom_desk::HeadlineConfig;
///
/// let config = HeadlineConfig::default();
/// assert_eq!(config.score("Drunken Man Fights Croc At Pub"), 5);
/// assert!(config.is_boring("Council Meeting Adjourned"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct HeadlineConfig {
    /// Each keyword found in a title adds one point
    keywords: Vec<String>,
    /// Titles containing any of these are dropped
    boring_keywords: Vec<String>,
    /// Candidates kept after ranking
    max_candidates: usize,
}

impl Default for HeadlineConfig {
    fn default() -> Self {
        let keywords = [
            "croc", "alligator", "shark", "snake", "python", "ufo", "alien", "attack", "brawl",
            "fight", "naked", "nude", "stolen", "beer", "pub", "toilet", "spider", "weird",
            "bizarre", "ghost", "mystery", "crash", "man", "woman", "florida", "boar", "pig",
            "drunken", "rampage",
        ];
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            boring_keywords: vec!["council".to_string(), "meeting".to_string()],
            max_candidates: 15,
        }
    }
}

impl HeadlineConfig {
    /// Create a config from explicit rules.
    pub fn new(keywords: Vec<String>, boring_keywords: Vec<String>, max_candidates: usize) -> Self {
        Self {
            keywords,
            boring_keywords,
            max_candidates,
        }
    }

    /// Number of keywords appearing in `title`, case-insensitively.
    pub fn score(&self, title: &str) -> u32 {
        let title = title.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| !k.is_empty() && title.contains(&k.to_lowercase()))
            .count() as u32
    }

    /// Whether `title` mentions a boring keyword.
    pub fn is_boring(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.boring_keywords
            .iter()
            .any(|k| !k.is_empty() && title.contains(&k.to_lowercase()))
    }

    /// Clean, filter, score and rank headlines, keeping the top candidates.
    ///
    /// Ties keep their input order.
    #[tracing::instrument(skip(self, headlines), fields(candidates = headlines.len()))]
    pub fn rank(&self, headlines: Vec<Headline>) -> Vec<Headline> {
        let mut ranked: Vec<Headline> = headlines
            .into_iter()
            .filter_map(|mut headline| {
                let title = clean_title(headline.title()).to_string();
                if title.is_empty() || self.is_boring(&title) {
                    debug!(title = %title, "Dropping headline");
                    return None;
                }
                headline.set_score(self.score(&title));
                headline.set_title(title);
                Some(headline)
            })
            .collect();

        ranked.sort_by(|a, b| b.score().cmp(a.score()));
        ranked.truncate(self.max_candidates);

        if let Some(top) = ranked.first() {
            info!(kept = ranked.len(), top = %top.title(), score = top.score(), "Ranked headlines");
        }
        ranked
    }
}

/// Title with the trailing ` - Publisher` suffix removed.
pub fn clean_title(title: &str) -> &str {
    title.split(" - ").next().unwrap_or(title).trim()
}

/// Fetch from every source and rank the combined list.
///
/// A source that fails is logged and skipped.
pub async fn gather_headlines(
    sources: &[&dyn HeadlineSource],
    config: &HeadlineConfig,
) -> Vec<Headline> {
    let mut all = Vec::new();
    for source in sources {
        match source.fetch().await {
            Ok(headlines) => {
                debug!(source = source.name(), count = headlines.len(), "Fetched headlines");
                all.extend(headlines);
            }
            Err(e) => warn!(source = source.name(), error = %e, "Headline source failed"),
        }
    }
    config.rank(all)
}

/// Headlines stored as a JSON array, as written by the scraper.
///
/// A missing file yields no headlines.
#[derive(Debug, Clone, Getters)]
pub struct JsonFileHeadlineSource {
    /// File to read
    path: PathBuf,
}

impl JsonFileHeadlineSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HeadlineSource for JsonFileHeadlineSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> NewsroomResult<Vec<Headline>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Headline file not found");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(GenerationError::new(GenerationErrorKind::HeadlineSource(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            GenerationError::new(GenerationErrorKind::HeadlineSource(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// Which headline list an assignment reads from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineFeed {
    /// Northern Beaches local news
    #[display("local_news")]
    LocalNews,
    /// Federal politics
    #[display("national_news")]
    NationalNews,
    /// Ranked tropical oddities
    #[display("troppo_corner")]
    TroppoCorner,
    /// No headlines; the persona improvises
    #[default]
    #[serde(rename = "none")]
    #[display("none")]
    NoHeadlines,
}

/// The day's headlines, split by feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct HeadlineBudget {
    /// Local news headlines
    local_news: Vec<Headline>,
    /// National news headlines
    national_news: Vec<Headline>,
    /// Ranked oddities for the back page
    troppo_corner: Vec<Headline>,
}

impl HeadlineBudget {
    /// Create a budget from its feeds.
    pub fn new(
        local_news: Vec<Headline>,
        national_news: Vec<Headline>,
        troppo_corner: Vec<Headline>,
    ) -> Self {
        Self {
            local_news,
            national_news,
            troppo_corner,
        }
    }

    /// Replace the back page feed with freshly ranked headlines.
    pub fn set_troppo_corner(&mut self, headlines: Vec<Headline>) {
        self.troppo_corner = headlines;
    }

    /// Headlines for a feed.
    pub fn feed(&self, feed: HeadlineFeed) -> &[Headline] {
        match feed {
            HeadlineFeed::LocalNews => &self.local_news,
            HeadlineFeed::NationalNews => &self.national_news,
            HeadlineFeed::TroppoCorner => &self.troppo_corner,
            HeadlineFeed::NoHeadlines => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_strips_publisher() {
        assert_eq!(clean_title("Croc eats esky - NT News"), "Croc eats esky");
        assert_eq!(clean_title("No publisher"), "No publisher");
        assert_eq!(clean_title("A - B - C"), "A");
    }

    #[test]
    fn test_score_counts_each_keyword_once() {
        let config = HeadlineConfig::default();
        assert_eq!(config.score("Croc croc CROC"), 1);
        assert_eq!(config.score("Quiet day"), 0);
        // "woman" contains "man" as well
        assert_eq!(config.score("Woman"), 2);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let config = HeadlineConfig::new(vec!["croc".into()], vec![], 10);
        let headlines = ["First croc", "Nothing", "Second croc"]
            .iter()
            .map(|t| {
                let mut h = Headline::default();
                h.set_title(*t);
                h
            })
            .collect();

        let ranked = config.rank(headlines);
        let titles: Vec<&str> = ranked.iter().map(|h| h.title().as_str()).collect();
        assert_eq!(titles, ["First croc", "Second croc", "Nothing"]);
    }
}
