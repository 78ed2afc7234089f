//! Static site rendering for the Newsroom.
//!
//! - [`SectionRegistry`]: validated, ordered section metadata
//! - [`ArticleRenderer`]: one story to one HTML fragment, by format
//! - [`PageTemplate`]: shared page chrome
//! - [`PageAssembler`]: every section page plus the front page
//!
//! # Example
//!
//! ```rust
//! use newsroom_core::{StoryRecordBuilder, WriterRoster};
//! use newsroom_render::{PageAssembler, SectionEntryBuilder, SectionRegistry, SiteStyle};
//!
//! let registry = SectionRegistry::new(vec![
//!     SectionEntryBuilder::default()
//!         .key("news")
//!         .display_name("Local News")
//!         .build()
//!         .unwrap(),
//! ])
//! .unwrap();
//! let style = SiteStyle::default();
//! let stories = vec![
//!     StoryRecordBuilder::default()
//!         .section("news")
//!         .headline("Ibis Annexes Bin")
//!         .body("Residents are concerned.")
//!         .featured(true)
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let pages = PageAssembler::new(&registry, &style).assemble(&stories, &WriterRoster::new());
//! assert_eq!(pages[0].file_name(), "index.html");
//! assert_eq!(pages[1].file_name(), "news.html");
//! assert!(pages[0].html().contains("Ibis Annexes Bin"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod assembler;
mod escape;
mod registry;
mod style;
mod template;

pub use article::{ArticleRenderer, Byline};
pub use assembler::{PageAssembler, RenderedPage, SectionPage};
pub use registry::{
    INDEX_SLUG, LayoutType, SectionEntry, SectionEntryBuilder, SectionRegistry, StaticContent,
};
pub use style::{SiteStyle, SiteStyleBuilder};
pub use template::{NavLink, PageTemplate};
