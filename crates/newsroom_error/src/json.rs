//! JSON encoding failures outside the content store.

/// A value that could not be turned into or read from JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} ({}:{})", subject, message, file, line)]
pub struct JsonError {
    /// What was being encoded or decoded, such as "headline context"
    pub subject: String,
    /// Message from serde_json
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Record a JSON failure for `subject` at the current location.
    ///
    /// ```
    /// use newsroom_error::JsonError;
    ///
    /// let err = JsonError::new("headline context", "key must be a string");
    /// assert_eq!(err.subject, "headline context");
    /// assert!(err.to_string().contains("key must be a string"));
    /// ```
    #[track_caller]
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject: subject.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
