//! Human-in-the-loop review of generated illustrations.

use newsroom_core::StoryRecord;

/// Outcome of reviewing one generated image.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ImageReview {
    /// Keep these bytes as the story's illustration
    #[display("accepted ({} bytes)", _0.len())]
    Accepted(Vec<u8>),
    /// Leave the story without an image for now
    #[display("skipped")]
    Skipped,
    /// Discard and generate another candidate
    #[display("retry requested")]
    RetryRequested,
}

/// Decides whether a generated image is fit to print.
///
/// Reviewers are typically interactive (show the image, read a keypress), so
/// the trait is synchronous and takes `&mut self`.
pub trait ImageReviewer {
    /// Review a candidate image for a story.
    fn review(&mut self, story: &StoryRecord, image: Vec<u8>) -> ImageReview;
}
