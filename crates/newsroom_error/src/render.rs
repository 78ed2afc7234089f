//! Rendering and publishing error types.

/// Kinds of rendering errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RenderErrorKind {
    /// Two section keys normalise to the same slug
    #[display("Sections '{}' and '{}' both slug to '{}'", first, second, slug)]
    SlugCollision {
        /// Section declared first
        first: String,
        /// Section that collided with it
        second: String,
        /// The shared slug
        slug: String,
    },
    /// A section key slugs to a reserved file name or to nothing
    #[display("Section key '{}' cannot be used as a page name", _0)]
    ReservedSlug(String),
    /// A story is missing a required field
    #[display("Story is missing required field '{}'", _0)]
    MissingField(String),
    /// Failed to create the output directory
    #[display("Failed to create output directory: {}", _0)]
    OutputDirectory(String),
    /// Failed to write a page
    #[display("Failed to write page: {}", _0)]
    PageWrite(String),
}

/// Rendering error with location tracking.
///
/// # Examples
///
/// ```
/// use newsroom_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::MissingField("headline".to_string()));
/// assert!(format!("{}", err).contains("headline"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
