//! Headline ranking command.

use newsroom::{
    HeadlineBudget, HeadlineSource, JsonFileHeadlineSource, NewsroomConfig, NewsroomResult, gather_headlines,
    read_optional_json, write_json_atomic,
};
use std::path::Path;

/// Rank a raw headline file.
///
/// Without `output`, the ranked list becomes the back page feed of the
/// configured headline budget; the other feeds are kept.
#[tracing::instrument(skip(config))]
pub async fn rank_headlines(
    config: &NewsroomConfig,
    input: &Path,
    output: Option<&Path>,
) -> NewsroomResult<()> {
    let source = JsonFileHeadlineSource::new(input);
    let sources: [&dyn HeadlineSource; 1] = [&source];
    let ranked = gather_headlines(&sources, config.headlines()).await;

    match output {
        Some(path) => {
            write_json_atomic(path, &ranked)?;
            println!("Caught {} potential stories in {}", ranked.len(), path.display());
        }
        None => {
            let path = config.paths().headlines();
            let mut budget: HeadlineBudget = read_optional_json(path)?.unwrap_or_default();
            budget.set_troppo_corner(ranked.clone());
            write_json_atomic(path, &budget)?;
            println!("Caught {} potential stories in {}", ranked.len(), path.display());
        }
    }

    for (rank, headline) in ranked.iter().take(3).enumerate() {
        println!("{}. [{} pts] {}", rank + 1, headline.score(), headline.title());
    }
    Ok(())
}
