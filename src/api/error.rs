//! API Error Types

use thiserror::Error;

/// Failures talking to the activities endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// A success response whose body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a raw error body.
    ///
    /// Only a string `detail` field is surfaced; anything else (plain text,
    /// structured validation errors) yields no detail.
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
            .filter(|detail| !detail.is_empty());

        ApiError::Rejected { status, detail }
    }

    /// Server-supplied detail of a rejection
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when no usable response was obtained
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
