//! Error types for outline extraction
//!
//! Per-file problems never surface here: malformed source is reported through
//! [`crate::extractors::base::Diagnostic`] and adapter faults are turned into empty
//! records by the engine. What remains are batch-level failures and configuration
//! mistakes.

use thiserror::Error as ThisError;

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum OutlineError {
    /// The batch itself is malformed; raised before any file is processed
    #[error("Invalid batch input at index {index}: {reason}")]
    InvalidBatchInput {
        /// Position of the offending unit in the input list
        index: usize,
        /// Human readable explanation
        reason: String,
    },

    /// The caller cancelled the batch; partial results were discarded
    #[error("Outline batch cancelled")]
    Cancelled,

    /// An adapter failed in a way that is not a recognized syntax error
    #[error("Internal parser fault for {language}: {message}")]
    InternalParserFault {
        /// Language tag of the adapter that failed
        language: String,
        /// Error message
        message: String,
    },

    /// The worker pool could not be created
    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// A language tag string that does not name a known adapter
    #[error("Unknown language tag: '{0}'")]
    UnknownLanguage(String),
}

impl OutlineError {
    pub fn invalid_input(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidBatchInput {
            index,
            reason: reason.into(),
        }
    }

    pub fn parser_fault(language: impl ToString, message: impl Into<String>) -> Self {
        Self::InternalParserFault {
            language: language.to_string(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for OutlineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for OutlineError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(e.to_string())
    }
}
