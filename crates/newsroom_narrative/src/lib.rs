//! Story arc direction for the Newsroom.
//!
//! An arc is a scripted, multi-day storyline. Each scripted day maps persona
//! keys to a plot instruction for that persona. The [`ArcDirector`] answers
//! "what should this persona do today" and moves the arc forward one day per
//! run, holding at the last scripted day once the script runs out.
//!
//! ```rust
//! use newsroom_narrative::{AdvanceOutcome, ArcDirector};
//! use newsroom_storage::{ArcScript, ContentDocument, ContentStore, NarrativeMeta};
//! use std::collections::BTreeMap;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::env::temp_dir().join("newsroom_arc_example");
//! let store = ContentStore::new(dir.join("stories.json"));
//!
//! let mut arc = ArcScript::default();
//! arc.insert(1, "Remy", "Discover the abandoned couch.");
//! let mut arcs = BTreeMap::new();
//! arcs.insert("hard_rubbish_war".to_string(), arc);
//! let document = ContentDocument::new(NarrativeMeta::new("hard_rubbish_war", 1), arcs, vec![]);
//!
//! let mut director = ArcDirector::new(store, document)?;
//! assert!(director.direction("Remy").contains("abandoned couch"));
//! assert_eq!(director.direction("Swoop"), "");
//!
//! // Day 2 is not scripted, so the arc holds.
//! assert_eq!(director.advance()?, AdvanceOutcome::ArcComplete { day: 1 });
//! # std::fs::remove_dir_all(&dir).ok();
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod director;
mod outcome;

pub use director::{ArcDirector, DIRECTION_RULE};
pub use outcome::AdvanceOutcome;
