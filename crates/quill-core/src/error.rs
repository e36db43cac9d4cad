//! Domain-level error types.

use thiserror::Error;

/// Backend call failures, already rewritten into user-readable messages.
///
/// The variant records what went wrong; `Display` is the message shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unreachable(String),

    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    SlugConflict(String),

    #[error("{0}")]
    Request(String),

    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Short machine-friendly name of the failure class, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unreachable(_) => "unreachable",
            ApiError::Timeout(_) => "timeout",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Server(_) => "server_error",
            ApiError::SlugConflict(_) => "slug_conflict",
            ApiError::Request(_) => "request_error",
            ApiError::Decode(_) => "decode_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Unreachable(msg)
            | ApiError::Timeout(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::Server(msg)
            | ApiError::SlugConflict(msg)
            | ApiError::Request(msg)
            | ApiError::Decode(msg) => msg,
        }
    }

    /// Same failure class with `prefix` prepended to the message.
    pub fn with_prefix(self, prefix: &str) -> Self {
        let wrap = |msg: String| format!("{prefix}{msg}");
        match self {
            ApiError::Unreachable(msg) => ApiError::Unreachable(wrap(msg)),
            ApiError::Timeout(msg) => ApiError::Timeout(wrap(msg)),
            ApiError::ServiceUnavailable(msg) => ApiError::ServiceUnavailable(wrap(msg)),
            ApiError::Server(msg) => ApiError::Server(wrap(msg)),
            ApiError::SlugConflict(msg) => ApiError::SlugConflict(wrap(msg)),
            ApiError::Request(msg) => ApiError::Request(wrap(msg)),
            ApiError::Decode(msg) => ApiError::Decode(wrap(msg)),
        }
    }
}

/// Controller errors - everything a page can show inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Local, pre-submission validation failure. No request was made.
    #[error("{0}")]
    Validation(String),

    /// A request from the same controller is still in flight.
    #[error("{0}")]
    Busy(&'static str),

    #[error("No content received from AI service")]
    EmptyGeneration,

    #[error(transparent)]
    Api(#[from] ApiError),
}
