//! Error types for the Newsroom pipeline.
//!
//! This crate provides the foundation error types used throughout the Newsroom workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use newsroom_error::{NewsroomResult, StoreError, StoreErrorKind};
//!
//! fn load_document() -> NewsroomResult<String> {
//!     Err(StoreError::new(StoreErrorKind::Corrupt("expected value at line 1".into())))?
//! }
//!
//! match load_document() {
//!     Ok(doc) => println!("Got: {}", doc),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod json;
mod narrative;
mod render;
mod store;

pub use config::{ConfigError, ConfigStage};
pub use error::{NewsroomError, NewsroomErrorKind, NewsroomResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use narrative::{NarrativeError, NarrativeErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use store::{StoreError, StoreErrorKind};
