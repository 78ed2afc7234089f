//! Content store error types.

/// Kinds of content store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// The document exists but could not be parsed
    #[display("Document is present but invalid: {}", _0)]
    Corrupt(String),
    /// Failed to read the document
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to write the document
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to create a directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to serialize the document
    #[display("Failed to serialize document: {}", _0)]
    Serialization(String),
}

/// Content store error with location tracking.
///
/// # Examples
///
/// ```
/// use newsroom_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Corrupt("EOF while parsing".to_string()));
/// assert!(format!("{}", err).contains("invalid"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error means the persisted document is unreadable as JSON.
    pub fn is_corrupt(&self) -> bool {
        matches!(self.kind, StoreErrorKind::Corrupt(_))
    }
}
