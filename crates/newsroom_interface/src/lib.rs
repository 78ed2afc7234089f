//! Trait interfaces for the Newsroom's external collaborators.
//!
//! The pipeline treats headline scraping, text generation and image generation
//! as opaque services. This crate defines the seams they plug into.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod review;
mod traits;

pub use review::{ImageReview, ImageReviewer};
pub use traits::{HeadlineSource, ImageGenerator, TextGenerator};
