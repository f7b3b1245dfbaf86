use thiserror::Error;

/// Unified error type for release-scout operations
#[derive(Error, Debug)]
pub enum ReleaseScoutError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid tag pattern: {0}")]
    Pattern(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-scout
pub type Result<T> = std::result::Result<T, ReleaseScoutError>;

impl ReleaseScoutError {
    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        ReleaseScoutError::Pattern(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        ReleaseScoutError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseScoutError::Config(msg.into())
    }
}
