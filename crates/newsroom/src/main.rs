//! Newsroom CLI binary.
//!
//! This binary provides command-line access to the pipeline:
//! - Publish the content store as a static site
//! - Inspect and advance the story arc
//! - Rank scraped headlines

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, advance, direction, publish, rank_headlines, status};

    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    newsroom::init_tracing(cli.verbose, cli.json_logs);

    let config = newsroom::NewsroomConfig::load_with(cli.config.as_deref())?;

    match cli.command {
        Commands::Publish { output } => publish(&config, output.as_deref())?,
        Commands::Direction { persona } => direction(&config, &persona)?,
        Commands::Advance => advance(&config)?,
        Commands::Status => status(&config)?,
        Commands::Headlines { input, output } => {
            rank_headlines(&config, &input, output.as_deref()).await?
        }
    }

    Ok(())
}
