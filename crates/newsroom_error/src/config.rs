//! Layered configuration failures.

/// Which step of configuration loading went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigStage {
    /// A source could not be read or merged
    #[display("load")]
    Load,
    /// The merged layers did not fit the settings shape
    #[display("parse")]
    Parse,
    /// The settings parsed but describe an impossible site
    #[display("validation")]
    Validation,
}

/// Configuration failure, tagged with the loading stage and call site.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration {} failed: {} ({}:{})", stage, message, file, line)]
pub struct ConfigError {
    /// Stage that failed
    pub stage: ConfigStage,
    /// What the config layer reported
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// A validation failure raised at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsroom_error::{ConfigError, ConfigStage};
    ///
    /// let err = ConfigError::new("darkroom.max_attempts must be at least 1");
    /// assert_eq!(err.stage, ConfigStage::Validation);
    /// assert!(err.to_string().starts_with("Configuration validation failed"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at_stage(ConfigStage::Validation, message)
    }

    /// A failure at a specific loading stage.
    #[track_caller]
    pub fn at_stage(stage: ConfigStage, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
