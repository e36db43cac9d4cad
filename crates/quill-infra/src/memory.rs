//! In-memory backend - mirrors the real backend's demo mode.
//!
//! Used when no backend is reachable on purpose (`--demo`) and in tests.
//! Note: posts are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::ApiError;
use quill_core::domain::{HealthStatus, Post, PostDraft};
use quill_core::ports::BlogApi;

use crate::http::ErrorMessages;

pub struct InMemoryBlogBackend {
    posts: RwLock<Vec<Post>>,
    ai_enabled: bool,
    messages: ErrorMessages,
}

impl InMemoryBlogBackend {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            ai_enabled: true,
            messages: ErrorMessages::default(),
        }
    }

    /// Behave like a backend without an AI key configured.
    pub fn without_ai(mut self) -> Self {
        self.ai_enabled = false;
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
            ..self
        }
    }

    fn demo_content(prompt: &str) -> String {
        format!(
            "# {prompt}\n\n\
             ## Introduction\n\n\
             This draft was produced by the offline demo backend. Replace it with your own words.\n\n\
             ## Key Points\n\n\
             - Why {prompt} matters\n\
             - Practical examples\n\
             - Common pitfalls\n\n\
             ## Conclusion\n\n\
             Summarize the main takeaways and invite readers to share their thoughts."
        )
    }
}

impl Default for InMemoryBlogBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogApi for InMemoryBlogBackend {
    async fn generate_content(&self, prompt: &str) -> Result<String, ApiError> {
        if !self.ai_enabled {
            return Err(ApiError::ServiceUnavailable(
                self.messages.ai_unavailable.clone(),
            ));
        }
        Ok(Self::demo_content(prompt.trim()))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|post| post.slug == draft.slug) {
            return Err(ApiError::SlugConflict(self.messages.slug_conflict.clone()));
        }

        let post = Post::from_draft(format!("demo_{}", Uuid::new_v4().simple()), draft);
        tracing::info!(id = %post.id, "Demo post created");
        // Newest first, like the backend's listing.
        posts.insert(0, post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.posts.read().await.clone())
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| {
                ApiError::Request(format!(
                    "{}Request failed with status code 404",
                    self.messages.fetch_post_prefix
                ))
            })
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let ai_service = if self.ai_enabled {
            "configured"
        } else {
            "not_configured"
        };
        Ok(HealthStatus {
            status: "healthy".to_string(),
            database: "demo_mode".to_string(),
            ai_service: ai_service.to_string(),
            backend: "running".to_string(),
            database_healthy: Some(false),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
            error: None,
        })
    }
}
