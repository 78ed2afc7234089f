//! Newsroom: a satirical newsletter pipeline.
//!
//! Headlines come in, persona-voiced stories are generated against a scripted
//! multi-day story arc, illustrations are curated, and the whole content store
//! is published as a static site.
//!
//! # Architecture
//!
//! Newsroom is organized as a workspace with focused crates:
//!
//! - `newsroom_error` - Error types
//! - `newsroom_core` - Stories, writers, headlines, drafts
//! - `newsroom_interface` - Text, image and headline collaborator traits
//! - `newsroom_storage` - Content store, roster loading, illustration storage
//! - `newsroom_narrative` - Story arc director
//! - `newsroom_render` - Section registry, article rendering, page assembly
//! - `newsroom_desk` - Headline ranking, prompts, editions, darkroom
//!
//! This crate (`newsroom`) re-exports everything for convenience and adds
//! layered configuration and the `newsroom` binary.
//!
//! # Operational constraint
//!
//! The content store is read and written wholesale by a single process. Do not
//! run two publishing or generation jobs against the same store at once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod telemetry;

pub use self::config::{NewsroomConfig, PathsConfig};
pub use telemetry::init_tracing;

pub use newsroom_core::*;
pub use newsroom_desk::*;
pub use newsroom_error::*;
pub use newsroom_interface::*;
pub use newsroom_narrative::*;
pub use newsroom_render::*;
pub use newsroom_storage::*;
