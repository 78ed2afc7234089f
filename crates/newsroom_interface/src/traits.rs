//! Trait definitions for generation backends and headline sources.

use async_trait::async_trait;
use newsroom_core::Headline;
use newsroom_error::NewsroomResult;

/// A text model that writes articles.
///
/// Implementations return the raw model text; the desk is responsible for
/// extracting the structured [`newsroom_core::ArticleDraft`] from it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a response for the assembled prompt.
    async fn generate(&self, prompt: &str) -> NewsroomResult<String>;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// An image model that illustrates stories.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for the prompt.
    ///
    /// `Ok(None)` means the model answered without an image (for example with
    /// text only); callers may retry.
    async fn generate_image(&self, prompt: &str) -> NewsroomResult<Option<Vec<u8>>>;

    /// Model identifier (e.g., "gemini-2.5-flash-image").
    fn model_name(&self) -> &str;
}

/// Something that produces candidate headlines, such as a set of RSS feeds.
///
/// An empty result is valid; nothing downstream requires headlines.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch the current headlines, in source order.
    async fn fetch(&self) -> NewsroomResult<Vec<Headline>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}
