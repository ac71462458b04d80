//! Error types for aground.

use thiserror::Error;

/// Result type for aground operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for aground operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Analyzer initialization failed.
    #[error("Analyzer initialization failed: {0}")]
    ModelInit(String),

    /// Linguistic analysis failed.
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// Pattern compilation failed.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an analyzer initialization error.
    pub fn model_init(msg: impl Into<String>) -> Self {
        Error::ModelInit(msg.into())
    }

    /// Create an analysis error.
    pub fn analysis(msg: impl Into<String>) -> Self {
        Error::Analysis(msg.into())
    }

    /// Create a pattern error.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Error::Pattern(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
