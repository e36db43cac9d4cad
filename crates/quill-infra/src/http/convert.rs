//! Mapping between wire DTOs and domain types.

use chrono::{DateTime, NaiveDateTime, Utc};

use quill_core::domain::{HealthStatus, Post, PostDraft};
use quill_shared::dto::{CreatePostRequest, HealthResponse, PostResponse};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn create_request(draft: &PostDraft) -> CreatePostRequest {
    CreatePostRequest {
        title: draft.title.clone(),
        content: draft.content.clone(),
        meta_description: draft.meta_description.clone(),
        tags: draft.tags.clone(),
        author: draft.author.clone(),
        slug: draft.slug.clone(),
        seo_title: draft.seo_title.clone(),
        seo_description: draft.seo_description.clone(),
    }
}

pub fn post_from_response(response: PostResponse) -> Post {
    Post {
        created_at: parse_timestamp(response.created_at.as_deref()),
        updated_at: parse_timestamp(response.updated_at.as_deref()),
        id: response.id,
        title: response.title,
        content: response.content,
        author: response.author,
        slug: response.slug,
        tags: response.tags,
        meta_description: response.seo_description,
        seo_title: response.seo_title,
    }
}

pub fn health_from_response(response: HealthResponse) -> HealthStatus {
    let or_unknown = |value: Option<String>| value.unwrap_or_else(|| "unknown".to_string());
    HealthStatus {
        status: response.status,
        database: or_unknown(response.database),
        ai_service: or_unknown(response.ai_service),
        backend: or_unknown(response.backend),
        database_healthy: response.database_healthy,
        timestamp: response.timestamp,
        error: response.error,
    }
}

/// Parse RFC 3339, or a naive ISO-8601 timestamp taken as UTC.
/// Missing or unreadable values fall back to the current time.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw else {
        return Utc::now();
    };

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT).map(|dt| dt.and_utc()))
        .unwrap_or_else(|e| {
            tracing::debug!(timestamp = raw, error = %e, "Unreadable timestamp");
            Utc::now()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_naive_timestamp_is_utc() {
        let ts = parse_timestamp(Some("2024-05-01T10:30:00.123456"));
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 5, 1));
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let ts = parse_timestamp(Some("2024-05-01T10:30:00+02:00"));
        assert_eq!(ts.hour(), 8);
    }

    #[test]
    fn test_post_mapping() {
        let response: PostResponse = serde_json::from_str(
            r#"{"id": "65f0", "title": "T", "content": "C", "author": "A", "slug": "t",
                "tags": ["x"], "seo_title": "T", "seo_description": "D",
                "created_at": "2024-01-02T03:04:05"}"#,
        )
        .unwrap();
        let post = post_from_response(response);
        assert_eq!(post.meta_description.as_deref(), Some("D"));
        assert_eq!(post.created_at.format("%Y-%m-%d").to_string(), "2024-01-02");
    }

    #[test]
    fn test_health_defaults_unknown() {
        let health = health_from_response(HealthResponse {
            status: "error".to_string(),
            backend: Some("running_with_errors".to_string()),
            ..Default::default()
        });
        assert_eq!(health.database, "unknown");
        assert_eq!(health.backend, "running_with_errors");
    }
}
