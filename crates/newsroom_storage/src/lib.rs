//! Persistent content for the Newsroom.
//!
//! This crate owns everything the pipeline reads from or writes to disk
//! between runs:
//!
//! - **Content store**: one JSON document holding the narrative state (current
//!   arc, day, arc scripts) beside the list of published stories
//! - **Writer roster**: the JSON mapping of writer keys to bylines
//! - **Darkroom**: approved illustrations, stored by content hash
//!
//! # Operational constraint
//!
//! The content store has exactly one writer per run and takes no lock. Do not
//! run two publishing or generation jobs against the same document at once.
//!
//! # Example
//!
//! ```rust
//! use newsroom_storage::ContentStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::env::temp_dir().join("newsroom_doc_example");
//! let store = ContentStore::new(dir.join("stories.json"));
//!
//! // A missing document is not an error: the seed state is returned.
//! let document = store.load()?;
//! assert_eq!(*document.meta().day(), 1);
//! assert!(document.stories().is_empty());
//!
//! store.save(&document)?;
//! # std::fs::remove_dir_all(&dir).ok();
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod darkroom;
mod document;
mod json_file;
mod store;

pub use darkroom::ImageDarkroom;
pub use document::{ArcScript, ArcStatus, ContentDocument, DayScript, NarrativeMeta, SEED_ARC_ID};
pub use json_file::{read_optional_json, write_json_atomic};
pub use store::{ContentStore, load_roster};
