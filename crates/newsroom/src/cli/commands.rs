//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Newsroom - story arcs, content store and static site publishing for a satirical newsletter
#[derive(Parser, Debug)]
#[command(name = "newsroom")]
#[command(about = "Story arcs, content store and static site publishing for a satirical newsletter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file applied over the bundled and user defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the content store into a static site
    Publish {
        /// Output directory (defaults to the configured one)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print today's plot instruction for a persona
    Direction {
        /// Persona key, e.g. Remy
        persona: String,
    },

    /// Advance the story arc to its next scripted day
    Advance,

    /// Show the story arc position and content store totals
    Status,

    /// Score, filter and rank a raw headline list
    Headlines {
        /// Raw headlines as a JSON array
        #[arg(long)]
        input: PathBuf,

        /// Write the ranked list here instead of into the headline budget
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
