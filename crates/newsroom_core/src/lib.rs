//! Core data types for the Newsroom pipeline.
//!
//! This crate provides the foundation data types shared by the content store,
//! the arc director, the renderer and the generation desk.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod format;
mod headline;
mod section;
mod serde_util;
mod story;
mod writer;

pub use draft::{ArticleDraft, ArticleDraftBuilder};
pub use format::StoryFormat;
pub use headline::{Headline, HeadlineBuilder};
pub use section::{SectionKey, slugify};
pub use story::{StoryRecord, StoryRecordBuilder};
pub use writer::{STAFF_NAME, WriterEntry, WriterRoster};
