use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog post as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub meta_description: Option<String>,
    pub seo_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Id of the stand-in post shown when the listing cannot be fetched.
    pub const PLACEHOLDER_ID: &'static str = "demo_1";

    /// Create a post from a submitted draft.
    pub fn from_draft(id: impl Into<String>, draft: &PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
            slug: draft.slug.clone(),
            tags: draft.tags.clone(),
            meta_description: Some(draft.seo_description.clone()),
            seo_title: Some(draft.seo_title.clone()),
            created_at: now,
            updated_at: now,
        }
    }

    /// The stand-in post returned when the backend cannot list posts.
    pub fn placeholder() -> Self {
        let now = Utc::now();
        Self {
            id: Self::PLACEHOLDER_ID.to_string(),
            title: "Welcome to AI Blog Platform".to_string(),
            content: "This is a demo post. The posts API is currently unavailable.".to_string(),
            author: "System".to_string(),
            slug: "welcome-demo".to_string(),
            tags: vec!["demo".to_string()],
            meta_description: Some("Demo post for AI Blog Platform".to_string()),
            seo_title: Some("Welcome Demo".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == Self::PLACEHOLDER_ID
    }
}

/// The shape assembled by the create form and submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub meta_description: String,
    pub tags: Vec<String>,
    pub author: String,
    pub slug: String,
    pub seo_title: String,
    pub seo_description: String,
}
