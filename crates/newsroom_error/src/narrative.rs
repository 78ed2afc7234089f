//! Story arc error types.

/// Specific error conditions for story arc operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// Day counter is not a positive integer
    #[display("Arc day must be a positive integer, got {}", _0)]
    InvalidDay(u32),
}

/// Error type for story arc operations.
///
/// # Examples
///
/// ```
/// use newsroom_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::InvalidDay(0));
/// assert!(format!("{}", err).contains("positive"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The specific error condition
    pub kind: NarrativeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new NarrativeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
