//! Translation of transport failures into user-facing errors.

use std::fmt;

use quill_core::ApiError;

/// Backend operation a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateContent,
    CreatePost,
    ListPosts,
    GetPost,
    Health,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::GenerateContent => "generate_content",
            Operation::CreatePost => "create_post",
            Operation::ListPosts => "list_posts",
            Operation::GetPost => "get_post",
            Operation::Health => "health",
        };
        f.write_str(name)
    }
}

/// What went wrong below the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    ConnectionRefused,
    Timeout,
    Status { code: u16, detail: Option<String> },
    Decode(String),
    Other(String),
}

impl From<&reqwest::Error> for TransportFailure {
    fn from(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportFailure::Timeout
        } else if err.is_connect() {
            TransportFailure::ConnectionRefused
        } else if err.is_decode() {
            TransportFailure::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportFailure::Status {
                code: status.as_u16(),
                detail: None,
            }
        } else {
            TransportFailure::Other(err.to_string())
        }
    }
}

/// Messages shown for each failure class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    pub unreachable: String,
    pub timeout: String,
    pub generation_timeout: String,
    pub ai_unavailable: String,
    pub server_error: String,
    pub create_server_error: String,
    pub slug_conflict: String,
    pub fetch_post_prefix: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            unreachable: "Cannot connect to backend server. Make sure the backend is running on port 8000.".to_string(),
            timeout: "Request timeout. The AI is taking longer than expected to generate content.".to_string(),
            generation_timeout: "AI generation is taking too long. This can happen with complex prompts. Please try a simpler prompt or try again.".to_string(),
            ai_unavailable: "AI service not available. Please check your API key configuration.".to_string(),
            server_error: "Server error. Please try again later.".to_string(),
            create_server_error: "Server error while creating post. Please try again.".to_string(),
            slug_conflict: "Slug already exists. Please choose a different URL slug.".to_string(),
            fetch_post_prefix: "Failed to fetch post: ".to_string(),
        }
    }
}

impl ErrorMessages {
    /// Rewrite `failure` during `op` into the error shown to the user.
    pub fn normalize(&self, op: Operation, failure: TransportFailure) -> ApiError {
        use TransportFailure::*;

        let err = match (op, failure) {
            (_, ConnectionRefused) => ApiError::Unreachable(self.unreachable.clone()),
            (Operation::GenerateContent, Timeout) => {
                ApiError::Timeout(self.generation_timeout.clone())
            }
            (_, Timeout) => ApiError::Timeout(self.timeout.clone()),
            (_, Status { code: 503, .. }) => {
                ApiError::ServiceUnavailable(self.ai_unavailable.clone())
            }
            (Operation::CreatePost, Status { code: 500, .. }) => {
                ApiError::Server(self.create_server_error.clone())
            }
            (_, Status { code: 500, .. }) => ApiError::Server(self.server_error.clone()),
            (Operation::CreatePost, Status { code: 400, .. }) => {
                ApiError::SlugConflict(self.slug_conflict.clone())
            }
            (_, Status { code, detail }) => {
                let message = match detail {
                    Some(detail) => format!("Request failed with status code {code}: {detail}"),
                    None => format!("Request failed with status code {code}"),
                };
                if code >= 500 {
                    ApiError::Server(message)
                } else {
                    ApiError::Request(message)
                }
            }
            (_, Decode(msg)) => ApiError::Decode(format!("Unexpected response from backend: {msg}")),
            (_, Other(msg)) => ApiError::Request(msg),
        };

        match op {
            Operation::GetPost => err.with_prefix(&self.fetch_post_prefix),
            _ => err,
        }
    }
}
