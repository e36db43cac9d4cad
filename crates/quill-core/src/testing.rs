//! Scripted `BlogApi` for controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{HealthStatus, Post, PostDraft};
use crate::error::ApiError;
use crate::ports::BlogApi;

/// Returns canned results and counts calls.
#[derive(Default)]
pub struct StubApi {
    pub generated: Option<Result<String, ApiError>>,
    pub create_error: Option<ApiError>,
    pub posts: Option<Result<Vec<Post>, ApiError>>,
    pub health: Option<Result<HealthStatus, ApiError>>,
    pub calls: AtomicUsize,
    pub drafts: Mutex<Vec<PostDraft>>,
}

impl StubApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlogApi for StubApi {
    async fn generate_content(&self, _prompt: &str) -> Result<String, ApiError> {
        self.record();
        self.generated
            .clone()
            .unwrap_or_else(|| Ok("## Generated\n\nBody".to_string()))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.record();
        self.drafts.lock().unwrap().push(draft.clone());
        match &self.create_error {
            Some(err) => Err(err.clone()),
            None => Ok(Post::from_draft("post_1", draft)),
        }
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.record();
        self.posts.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.record();
        Err(ApiError::Request(format!("no post {id}")))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record();
        self.health
            .clone()
            .unwrap_or_else(|| Err(ApiError::Unreachable("down".to_string())))
    }
}
