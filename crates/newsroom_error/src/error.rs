//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, JsonError, NarrativeError, RenderError, StoreError,
};

/// Every error condition the Newsroom workspace can surface.
///
/// # Examples
///
/// ```
/// use newsroom_error::{NewsroomError, JsonError};
///
/// let json_err = JsonError::new("headline context", "unexpected end of input");
/// let err: NewsroomError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NewsroomErrorKind {
    /// JSON encoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content store error
    #[from(StoreError)]
    Store(StoreError),
    /// Story arc error
    #[from(NarrativeError)]
    Narrative(NarrativeError),
    /// Rendering error
    #[from(RenderError)]
    Render(RenderError),
    /// Collaborator error
    #[from(GenerationError)]
    Generation(GenerationError),
}

/// Newsroom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use newsroom_error::{NewsroomResult, ConfigError};
///
/// fn might_fail() -> NewsroomResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Newsroom Error: {}", _0)]
pub struct NewsroomError(Box<NewsroomErrorKind>);

impl NewsroomError {
    /// Create a new error from a kind.
    pub fn new(kind: NewsroomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NewsroomErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to NewsroomErrorKind
impl<T> From<T> for NewsroomError
where
    T: Into<NewsroomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Newsroom operations.
pub type NewsroomResult<T> = std::result::Result<T, NewsroomError>;
