//! Guide backend error types

use thiserror::Error;

/// Errors that can occur while fetching guide data
///
/// Variants are `Clone` so the error can travel inside UI messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// The request hit the configured timeout
    #[error("Guide request timed out")]
    Timeout,

    /// The backend answered with a non-success status
    #[error("Guide backend returned HTTP {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Connection-level failure (DNS, refused, dropped)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected schema
    #[error("Failed to decode guide response: {0}")]
    Decode(String),
}

impl GuideError {
    /// HTTP status code, when the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            GuideError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for guide data operations
pub type GuideResult<T> = Result<T, GuideError>;
