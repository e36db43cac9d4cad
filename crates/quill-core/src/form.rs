//! Create-post form controller.
//!
//! Holds the editable fields, fills slug and meta description once from the
//! title and content, validates before submission and guards against a
//! second save while one is in flight.

use serde::Serialize;

use crate::domain::{Post, PostDraft};
use crate::error::{ApiError, DomainError};
use crate::ports::BlogApi;
use crate::seo::{self, SeoReport};
use crate::slug::{self, AUTO_SLUG_MAX_LEN};

pub const DEFAULT_AUTHOR: &str = "Anonymous";

const DESCRIPTION_MAX_CHARS: usize = 150;
const TITLE_REQUIRED: &str = "Title is required";
const CONTENT_REQUIRED: &str = "Content is required";
const ALREADY_SAVING: &str = "A save is already in progress";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SaveState {
    #[default]
    Editing,
    Saving,
    Saved {
        post: Post,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PostForm {
    title: String,
    content: String,
    meta_description: String,
    tags: String,
    author: String,
    slug: String,
    save: SaveState,
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn meta_description(&self) -> &str {
        &self.meta_description
    }

    /// Raw comma-separated tag input.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn save_state(&self) -> &SaveState {
        &self.save
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.save, SaveState::Saving)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.autofill_slug();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.autofill_description();
    }

    pub fn set_meta_description(&mut self, description: impl Into<String>) {
        self.meta_description = description.into();
        self.autofill_description();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.autofill_slug();
    }

    /// Replace the content with AI-generated text.
    pub fn apply_generated(&mut self, content: impl Into<String>) {
        self.set_content(content);
    }

    /// Live SEO analysis of the current fields.
    pub fn seo_report(&self) -> SeoReport {
        seo::analyze(&self.title, &self.content, &self.meta_description)
    }

    // Fills only while the slug is empty; a filled or user-edited slug is
    // never regenerated from a later title.
    fn autofill_slug(&mut self) {
        if !self.title.is_empty() && self.slug.is_empty() {
            self.slug = slug::slugify_truncated(&self.title, AUTO_SLUG_MAX_LEN);
        }
    }

    fn autofill_description(&mut self) {
        if !self.content.is_empty() && self.meta_description.is_empty() {
            if let Some(description) = derive_description(&self.content) {
                self.meta_description = description;
            }
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation(TITLE_REQUIRED.to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation(CONTENT_REQUIRED.to_string()));
        }
        Ok(())
    }

    /// Assemble the submission body from the current fields.
    pub fn to_draft(&self) -> PostDraft {
        let title = self.title.trim().to_string();
        let meta_description = self.meta_description.trim().to_string();
        let author = match self.author.trim() {
            "" => DEFAULT_AUTHOR.to_string(),
            author => author.to_string(),
        };
        let slug = match self.slug.trim() {
            "" => slug::slugify(&self.title),
            slug => slug.to_string(),
        };

        PostDraft {
            content: self.content.trim().to_string(),
            tags: parse_tags(&self.tags),
            author,
            slug,
            seo_title: title.clone(),
            seo_description: meta_description.clone(),
            title,
            meta_description,
        }
    }

    /// Validate and enter the saving state; returns the draft to send.
    pub fn begin_submit(&mut self) -> Result<PostDraft, DomainError> {
        if self.is_saving() {
            return Err(DomainError::Busy(ALREADY_SAVING));
        }
        if let Err(err) = self.validate() {
            self.save = SaveState::Failed {
                message: err.to_string(),
            };
            return Err(err);
        }

        let draft = self.to_draft();
        if !slug::is_valid_slug(&draft.slug) {
            tracing::warn!(slug = %draft.slug, "Submitting a slug that is not URL-safe");
        }
        tracing::debug!(title = %draft.title, author = %draft.author, slug = %draft.slug, "Submitting post");

        self.save = SaveState::Saving;
        Ok(draft)
    }

    /// Record the backend's answer to the draft from [`PostForm::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<Post, ApiError>) -> Result<Post, DomainError> {
        match result {
            Ok(post) => {
                tracing::info!(id = %post.id, slug = %post.slug, "Post published");
                self.save = SaveState::Saved { post: post.clone() };
                Ok(post)
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Saving post failed");
                self.save = SaveState::Failed {
                    message: err.to_string(),
                };
                Err(err.into())
            }
        }
    }

    /// Validate, send and record the outcome in one step.
    pub async fn submit(&mut self, api: &dyn BlogApi) -> Result<Post, DomainError> {
        let draft = self.begin_submit()?;
        let result = api.create_post(&draft).await;
        self.finish_submit(result)
    }
}

/// Meta description taken from the first paragraph of `content`, with
/// markdown markers removed. `None` when nothing is left.
pub fn derive_description(content: &str) -> Option<String> {
    let first_paragraph = content.split("\n\n").next().unwrap_or_default();
    let stripped: String = first_paragraph
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`'))
        .take(DESCRIPTION_MAX_CHARS)
        .collect();
    let description = stripped.trim();

    match description.chars().count() {
        0 => None,
        DESCRIPTION_MAX_CHARS => Some(format!("{description}...")),
        _ => Some(description.to_string()),
    }
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubApi;

    #[test]
    fn test_slug_autofills_once() {
        let mut form = PostForm::new();
        form.set_title("Hello, World!");
        assert_eq!(form.slug(), "hello-world");

        form.set_title("Hello, World! Revised");
        assert_eq!(form.slug(), "hello-world");
    }

    #[test]
    fn test_user_slug_is_kept() {
        let mut form = PostForm::new();
        form.set_slug("Custom Slug");
        form.set_title("Some title");
        assert_eq!(form.slug(), "Custom Slug");
    }

    #[test]
    fn test_cleared_slug_refills_from_title() {
        let mut form = PostForm::new();
        form.set_title("First Title");
        form.set_slug("");
        assert_eq!(form.slug(), "first-title");
    }

    #[test]
    fn test_cleared_title_leaves_slug() {
        let mut form = PostForm::new();
        form.set_title("First Title");
        form.set_title("");
        assert_eq!(form.slug(), "first-title");
    }

    #[test]
    fn test_description_autofill() {
        let mut form = PostForm::new();
        form.set_content("# Intro to **Rust**\n\nSecond paragraph.");
        assert_eq!(form.meta_description(), "Intro to Rust");

        form.set_content("Something else entirely");
        assert_eq!(form.meta_description(), "Intro to Rust");
    }

    #[test]
    fn test_description_truncation_marker() {
        let long = "w".repeat(400);
        assert_eq!(derive_description(&long), Some(format!("{}...", "w".repeat(150))));
        assert_eq!(derive_description("short"), Some("short".to_string()));
        assert_eq!(derive_description("### \n\nbody"), None);
    }

    #[test]
    fn test_validation_order() {
        let mut form = PostForm::new();
        form.set_content("body");
        assert_eq!(
            form.validate(),
            Err(DomainError::Validation(TITLE_REQUIRED.to_string()))
        );

        let mut form = PostForm::new();
        form.set_title("Title");
        form.set_content("   ");
        assert_eq!(
            form.validate(),
            Err(DomainError::Validation(CONTENT_REQUIRED.to_string()))
        );
    }

    #[test]
    fn test_draft_defaults() {
        let mut form = PostForm::new();
        form.set_title("  My Post  ");
        form.set_content("  Body text  ");
        form.set_tags("rust, , web ,");
        form.set_slug("   ");

        let draft = form.to_draft();
        assert_eq!(draft.title, "My Post");
        assert_eq!(draft.content, "Body text");
        assert_eq!(draft.tags, vec!["rust", "web"]);
        assert_eq!(draft.author, DEFAULT_AUTHOR);
        assert_eq!(draft.slug, "my-post");
        assert_eq!(draft.seo_title, "My Post");
        assert_eq!(draft.seo_description, draft.meta_description);
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let api = StubApi::default();
        let mut form = PostForm::new();

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.to_string(), TITLE_REQUIRED);
        assert_eq!(api.calls(), 0);
        assert!(matches!(form.save_state(), SaveState::Failed { .. }));
    }

    #[tokio::test]
    async fn test_submit_success() {
        let api = StubApi::default();
        let mut form = PostForm::new();
        form.set_title("Hello, World!");
        form.set_content("Body");

        let post = form.submit(&api).await.unwrap();
        assert_eq!(post.slug, "hello-world");
        assert!(matches!(form.save_state(), SaveState::Saved { .. }));
        assert_eq!(api.drafts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_conflict() {
        let api = StubApi {
            create_error: Some(ApiError::SlugConflict("Slug already exists.".to_string())),
            ..Default::default()
        };
        let mut form = PostForm::new();
        form.set_title("Hello");
        form.set_content("Body");

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.to_string(), "Slug already exists.");
        assert!(!form.is_saving());
    }

    #[test]
    fn test_second_submit_is_refused() {
        let mut form = PostForm::new();
        form.set_title("Hello");
        form.set_content("Body");

        form.begin_submit().unwrap();
        assert!(matches!(form.begin_submit(), Err(DomainError::Busy(_))));
    }
}
