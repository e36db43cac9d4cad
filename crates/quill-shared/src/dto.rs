//! Data Transfer Objects - request/response bodies of the backend API.

use serde::{Deserialize, Serialize};

/// POST /api/generate-content request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub prompt: String,
}

/// POST /api/generate-content response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub content: String,
}

/// POST /api/posts request body.
///
/// The backend reads `seo_description`; `metaDescription` is sent alongside
/// it for older backends that still expect the camel-case field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    pub tags: Vec<String>,
    pub author: String,
    pub slug: String,
    pub seo_title: String,
    pub seo_description: String,
}

/// A post as serialized by the backend.
///
/// Timestamps are kept as text here; the backend emits naive ISO-8601 values
/// for stored posts and RFC 3339 values elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// GET /api/health response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub database_healthy: Option<bool>,
    #[serde(default)]
    pub ai_service: Option<String>,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
