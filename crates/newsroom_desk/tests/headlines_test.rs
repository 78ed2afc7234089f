use async_trait::async_trait;
use newsroom_core::{Headline, HeadlineBuilder};
use newsroom_desk::{HeadlineConfig, JsonFileHeadlineSource, gather_headlines};
use newsroom_error::{GenerationError, GenerationErrorKind, NewsroomResult};
use newsroom_interface::HeadlineSource;
use tempfile::TempDir;

struct BrokenFeed;

#[async_trait]
impl HeadlineSource for BrokenFeed {
    async fn fetch(&self) -> NewsroomResult<Vec<Headline>> {
        Err(GenerationError::new(GenerationErrorKind::HeadlineSource("timeout".into())).into())
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[tokio::test]
async fn scraper_output_is_cleaned_filtered_and_ranked() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("raw.json");
    std::fs::write(
        &path,
        r#"[
            { "title": "Council meeting runs long - Cairns Post", "link": "a" },
            { "title": "Quiet day at the markets - NT News", "link": "b" },
            { "title": "Drunken man fights croc at pub - NT News", "link": "c", "source_query": "site:ntnews.com.au" },
            { "title": "Snake found in toilet - Townsville Bulletin", "link": "d" }
        ]"#,
    )
    .unwrap();
    let file = JsonFileHeadlineSource::new(&path);

    let sources: [&dyn HeadlineSource; 2] = [&file, &BrokenFeed];
    let ranked = gather_headlines(&sources, &HeadlineConfig::default()).await;

    let titles: Vec<&str> = ranked.iter().map(|h| h.title().as_str()).collect();
    assert_eq!(
        titles,
        [
            "Drunken man fights croc at pub",
            "Snake found in toilet",
            "Quiet day at the markets"
        ]
    );
    assert_eq!(*ranked[0].score(), 5);
    assert_eq!(ranked[0].url(), "c");
    assert_eq!(ranked[0].source(), "site:ntnews.com.au");
    assert_eq!(*ranked[2].score(), 0);
}

#[tokio::test]
async fn scraper_records_with_clean_title_are_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("raw_headlines.json");
    std::fs::write(
        &path,
        r#"[
            {"source_query":"Cairns Post","title":"Croc eats esky - Cairns Post","link":"u","published":"Mon","clean_title":"Croc eats esky","crazy_score":1},
            {"source_query":"NT News","title":"Council budget passes - NT News","link":"v","published":"Tue","clean_title":"Council budget passes","crazy_score":0}
        ]"#,
    )
    .unwrap();
    let file = JsonFileHeadlineSource::new(&path);

    let fetched = file.fetch().await.expect("scraper output parses");
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].title(), "Croc eats esky");
    assert_eq!(fetched[0].url(), "u");
    assert_eq!(fetched[0].source(), "Cairns Post");
    assert_eq!(fetched[0].published_at(), "Mon");

    let sources: [&dyn HeadlineSource; 1] = [&file];
    let ranked = gather_headlines(&sources, &HeadlineConfig::default()).await;
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].title(), "Croc eats esky");
    assert_eq!(*ranked[0].score(), 1);
}

#[tokio::test]
async fn missing_headline_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = JsonFileHeadlineSource::new(dir.path().join("absent.json"));

    assert!(file.fetch().await.unwrap().is_empty());
    let sources: [&dyn HeadlineSource; 1] = [&file];
    assert!(gather_headlines(&sources, &HeadlineConfig::default()).await.is_empty());
}

#[test]
fn ranking_keeps_top_candidates() {
    let config = HeadlineConfig::new(vec!["croc".into()], vec![], 2);
    let headlines = (0..5)
        .map(|i| {
            HeadlineBuilder::default()
                .title(format!("Croc number {i}"))
                .build()
                .unwrap()
        })
        .collect();

    assert_eq!(config.rank(headlines).len(), 2);
}
