//! Collaborator (headline, text and image generation) error types.

/// Error kinds for collaborator calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The upstream request failed
    #[display("Request failed: {}", _0)]
    Request(String),
    /// The model answered but not in the requested schema
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// Headline source could not be read
    #[display("Headline source failed: {}", _0)]
    HeadlineSource(String),
    /// Image generation failed
    #[display("Image generation failed: {}", _0)]
    Image(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
