//! Story arc commands.

use newsroom::{ArcDirector, NewsroomConfig, NewsroomResult};

/// Print the persona's wrapped instruction for today, if there is one.
pub fn direction(config: &NewsroomConfig, persona: &str) -> NewsroomResult<()> {
    let director = ArcDirector::open(config.content_store())?;
    let direction = director.direction(persona);
    if direction.is_empty() {
        tracing::info!(persona, "No instruction today");
    } else {
        println!("{}", direction.trim_start());
    }
    Ok(())
}

/// Advance the arc and report the outcome.
pub fn advance(config: &NewsroomConfig) -> NewsroomResult<()> {
    let mut director = ArcDirector::open(config.content_store())?;
    let outcome = director.advance()?;
    println!("{}: {}", director.arc_id(), outcome);
    Ok(())
}

/// Print the arc position and story totals.
pub fn status(config: &NewsroomConfig) -> NewsroomResult<()> {
    let store = config.content_store();
    let director = ArcDirector::open(store.clone())?;
    let stories = director.document().stories();

    println!("Store:     {}", store.path().display());
    println!("Arc:       {}", director.arc_id());
    println!(
        "Day:       {} of {} scripted ({})",
        director.day(),
        director.scripted_days(),
        director.status()
    );
    println!("Stories:   {}", stories.len());
    println!(
        "Featured:  {}",
        stories.iter().filter(|s| *s.featured()).count()
    );
    println!(
        "No image:  {}",
        stories.iter().filter(|s| s.needs_image()).count()
    );
    Ok(())
}
