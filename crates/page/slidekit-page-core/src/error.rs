//! Error types for page state machines.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,
    #[error("invalid timing: {0} must be positive")]
    InvalidTiming(&'static str),
    #[error("page config json: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PageError>;
