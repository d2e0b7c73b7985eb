//! Error types for the NBA reference dashboard CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtsideError>;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("server responded with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("request cancelled")]
    Cancelled,

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

impl CourtsideError {
    /// True when the underlying request was cancelled rather than failed.
    ///
    /// Cancellation is the one fetch outcome that must never surface as an
    /// error banner; callers use this to discard the result silently.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CourtsideError::Cancelled)
    }

    /// The HTTP status for a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            CourtsideError::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// True for transport-level failures where no response arrived at all.
    pub fn is_network(&self) -> bool {
        matches!(self, CourtsideError::Http(e) if !e.is_status())
    }
}
