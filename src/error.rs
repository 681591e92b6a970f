use thiserror::Error;

/// Unified error type for verstamp operations
#[derive(Error, Debug)]
pub enum VerstampError {
    #[error("Invalid version format: '{0}' - expected MAJOR.MINOR.PATCH")]
    InvalidVersionFormat(String),

    #[error("Missing argument: a target version is required")]
    MissingArgument,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verstamp
pub type Result<T> = std::result::Result<T, VerstampError>;

impl VerstampError {
    /// Create an invalid version error for the given input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        VerstampError::InvalidVersionFormat(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerstampError::Config(msg.into())
    }

    /// Whether the error was caused by the version argument itself
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            VerstampError::InvalidVersionFormat(_) | VerstampError::MissingArgument
        )
    }
}
