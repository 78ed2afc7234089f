//! The generation desk: everything between the headline feeds and the content
//! store.
//!
//! - **Headlines**: clean, filter, score and rank scraped headlines
//! - **Cast**: the personas who write the paper
//! - **Prompts**: persona framing, headlines, the arc's plot instruction and
//!   topical house rules
//! - **Editions**: one story per assignment, napping placeholders on failure,
//!   then the arc advances
//! - **Darkroom**: illustrate bare stories through a review loop
//!
//! The text and image models are reached through the
//! [`newsroom_interface`] traits; this crate ships no network clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cast;
mod darkroom;
mod edition;
mod headlines;
mod prompt;

pub use cast::{Cast, EDITOR, Persona};
pub use darkroom::{DarkroomReport, DarkroomSettings, develop_images, image_prompt};
pub use edition::{
    Assignment, AssignmentBuilder, EditionReport, clean_model_output, default_assignments,
    generate_edition, parse_draft,
};
pub use headlines::{
    HeadlineBudget, HeadlineConfig, HeadlineFeed, JsonFileHeadlineSource, clean_title,
    gather_headlines,
};
pub use prompt::{DeskSettings, TopicalRule, build_prompt};
