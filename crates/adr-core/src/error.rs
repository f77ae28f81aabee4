use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdrError {
    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("invalid glob pattern '{pattern}': {reason}")]
    Glob { pattern: String, reason: String },

    #[error("git {command} failed: {reason}")]
    Git { command: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdrError>;
