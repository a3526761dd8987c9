//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Section identifier was empty or malformed
    #[error("Invalid section id: {0:?}")]
    InvalidSection(String),

    /// The same section was registered twice
    #[error("Duplicate section: {0}")]
    DuplicateSection(String),

    /// Event referenced a section that is not registered
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Content feed could not be parsed
    #[error("Content parse error: {0}")]
    Content(#[from] serde_json::Error),

    /// Content feed parsed but is unusable
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A clipboard backend refused the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Contact form input did not pass validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Submission collaborator reported a failure
    #[error("Submission failed: {0}")]
    SubmitFailed(String),

    /// Submission collaborator did not answer in time
    #[error("Submission timed out after {0} ms")]
    SubmitTimeout(u64),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
