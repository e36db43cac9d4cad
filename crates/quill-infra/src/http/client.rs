//! reqwest-based backend client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use quill_core::ApiError;
use quill_core::domain::{HealthStatus, Post, PostDraft};
use quill_core::ports::BlogApi;
use quill_shared::ErrorResponse;
use quill_shared::dto::{
    GenerateContentRequest, GenerateContentResponse, HealthResponse, PostResponse,
};

use super::convert;
use super::errors::{ErrorMessages, Operation, TransportFailure};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Generation can take tens of seconds, so every call shares a generous limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const PROMPT_LOG_CHARS: usize = 50;

/// Client configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub messages: ErrorMessages,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            messages: ErrorMessages::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of [`BlogApi`].
pub struct HttpBlogClient {
    http: Client,
    base_url: Url,
    messages: ErrorMessages,
}

impl HttpBlogClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ApiError::Request(format!("Invalid backend URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Request(format!(
                "Invalid backend URL {}",
                config.base_url
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, timeout = ?config.timeout, "HTTP client ready");

        Ok(Self {
            http,
            base_url,
            messages: config.messages,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can hold path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        tracing::debug!(method = %method, url = %url, "API request");
        self.http.request(method, url)
    }

    fn fail(&self, op: Operation, failure: TransportFailure) -> ApiError {
        tracing::error!(operation = %op, failure = ?failure, "API request failed");
        self.messages.normalize(op, failure)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| self.fail(op, TransportFailure::from(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message());
            return Err(self.fail(
                op,
                TransportFailure::Status {
                    code: status.as_u16(),
                    detail,
                },
            ));
        }

        tracing::debug!(operation = %op, status = status.as_u16(), "API success");
        response
            .json::<T>()
            .await
            .map_err(|e| self.fail(op, TransportFailure::from(&e)))
    }
}

#[async_trait]
impl BlogApi for HttpBlogClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, ApiError> {
        let preview: String = prompt.chars().take(PROMPT_LOG_CHARS).collect();
        tracing::info!(prompt = %preview, "Starting AI content generation");

        let request = self
            .request(Method::POST, &["api", "generate-content"])
            .json(&GenerateContentRequest {
                prompt: prompt.to_string(),
            });
        let response: GenerateContentResponse =
            self.send(Operation::GenerateContent, request).await?;
        Ok(response.content)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::info!(title = %draft.title, author = %draft.author, slug = %draft.slug, "Creating post");

        let request = self
            .request(Method::POST, &["api", "posts"])
            .json(&convert::create_request(draft));
        let response: PostResponse = self.send(Operation::CreatePost, request).await?;
        Ok(convert::post_from_response(response))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let request = self.request(Method::GET, &["api", "posts"]);
        match self
            .send::<Vec<PostResponse>>(Operation::ListPosts, request)
            .await
        {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "Posts fetched");
                Ok(posts.into_iter().map(convert::post_from_response).collect())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Posts unavailable, showing placeholder");
                Ok(vec![Post::placeholder()])
            }
        }
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        let request = self.request(Method::GET, &["api", "posts", id]);
        let response: PostResponse = self.send(Operation::GetPost, request).await?;
        Ok(convert::post_from_response(response))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let request = self.request(Method::GET, &["api", "health"]);
        let response: HealthResponse = self.send(Operation::Health, request).await?;
        Ok(convert::health_from_response(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = HttpBlogClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(&["api", "posts"]).as_str(),
            "http://localhost:8000/api/posts"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_escapes_ids() {
        let config = ClientConfig::default().with_base_url("http://example.com/blog/");
        let client = HttpBlogClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(&["api", "posts", "a/b"]).as_str(),
            "http://example.com/blog/api/posts/a%2Fb"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(
            HttpBlogClient::new(config),
            Err(ApiError::Request(_))
        ));
    }
}
