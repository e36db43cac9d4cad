use async_trait::async_trait;

use crate::domain::{HealthStatus, Post, PostDraft};
use crate::error::ApiError;

/// The blog backend as seen by the authoring client.
///
/// Implementations normalize every failure into an [`ApiError`] whose
/// message can be shown to the user unchanged.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Ask the AI service for post content matching `prompt`.
    async fn generate_content(&self, prompt: &str) -> Result<String, ApiError>;

    /// Persist a new post.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError>;

    /// List all posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetch a single post by id.
    async fn get_post(&self, id: &str) -> Result<Post, ApiError>;

    /// Report backend, database and AI service status.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
