//! Site publishing command.

use newsroom::{NewsroomConfig, NewsroomResult, PageAssembler, load_roster};
use std::path::Path;

/// Load the content store and roster, then write every page.
#[tracing::instrument(skip(config))]
pub fn publish(config: &NewsroomConfig, output: Option<&Path>) -> NewsroomResult<()> {
    let document = config.content_store().load()?;
    let roster = load_roster(config.paths().staff_roster())?;
    let registry = config.registry()?;
    let output = output.unwrap_or(config.paths().output_dir());

    let written =
        PageAssembler::new(&registry, config.site()).publish(document.stories(), &roster, output)?;

    println!(
        "{} is published: {} pages in {}",
        config.site().title(),
        written.len(),
        output.display()
    );
    Ok(())
}
