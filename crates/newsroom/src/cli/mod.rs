//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the newsroom binary.

mod arc;
mod commands;
mod headlines;
mod publish;

pub use arc::{advance, direction, status};
pub use commands::{Cli, Commands};
pub use headlines::rank_headlines;
pub use publish::publish;
