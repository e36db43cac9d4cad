//! Posts listing controller.

use serde::Serialize;

use crate::domain::Post;
use crate::ports::BlogApi;

const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ListingState {
    #[default]
    Loading,
    Loaded(Vec<Post>),
    Failed(String),
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub slug: String,
    pub tags: Vec<String>,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        let head: String = post.content.chars().take(EXCERPT_CHARS).collect();
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: format!("{head}..."),
            author: post.author.clone(),
            slug: post.slug.clone(),
            tags: post.tags.clone(),
            created: post.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostListing {
    state: ListingState,
}

impl PostListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub async fn load(&mut self, api: &dyn BlogApi) -> &ListingState {
        self.state = ListingState::Loading;
        self.state = match api.list_posts().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Posts loaded");
                ListingState::Loaded(posts)
            }
            Err(err) => {
                tracing::error!(error = %err, "Loading posts failed");
                ListingState::Failed(err.to_string())
            }
        };
        &self.state
    }

    /// Loaded successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ListingState::Loaded(posts) if posts.is_empty())
    }

    /// The backend could not list posts and the stand-in post is shown.
    pub fn is_placeholder(&self) -> bool {
        matches!(&self.state, ListingState::Loaded(posts) if posts.iter().any(Post::is_placeholder))
    }

    pub fn summaries(&self) -> Vec<PostSummary> {
        match &self.state {
            ListingState::Loaded(posts) => posts.iter().map(PostSummary::from).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::StubApi;

    #[tokio::test]
    async fn test_load_posts() {
        let api = StubApi {
            posts: Some(Ok(vec![Post::placeholder()])),
            ..Default::default()
        };
        let mut listing = PostListing::new();
        assert_eq!(listing.state(), &ListingState::Loading);

        listing.load(&api).await;
        let summaries = listing.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, Post::PLACEHOLDER_ID);
        assert!(summaries[0].excerpt.ends_with("..."));
        assert!(!listing.is_empty());
        assert!(listing.is_placeholder());
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let api = StubApi::default();
        let mut listing = PostListing::new();
        listing.load(&api).await;
        assert!(listing.is_empty());
        assert!(!listing.is_placeholder());
    }

    #[tokio::test]
    async fn test_failed_listing() {
        let api = StubApi {
            posts: Some(Err(ApiError::Server("Server error.".to_string()))),
            ..Default::default()
        };
        let mut listing = PostListing::new();
        listing.load(&api).await;
        assert_eq!(listing.state(), &ListingState::Failed("Server error.".to_string()));
        assert!(listing.summaries().is_empty());
    }

    #[test]
    fn test_excerpt_is_capped() {
        let mut post = Post::placeholder();
        post.content = "x".repeat(500);
        let summary = PostSummary::from(&post);
        assert_eq!(summary.excerpt.chars().count(), 203);
    }
}
