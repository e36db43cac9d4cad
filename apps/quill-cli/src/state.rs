//! Application state - the backend every command talks to.

use std::sync::Arc;

use quill_core::ports::BlogApi;
use quill_infra::{HttpBlogClient, InMemoryBlogBackend};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn BlogApi>,
}

impl AppState {
    /// Build the state with the configured backend.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let api: Arc<dyn BlogApi> = if config.demo {
            tracing::warn!("Demo mode: posts are kept in memory and discarded on exit");
            Arc::new(InMemoryBlogBackend::new())
        } else {
            let client = HttpBlogClient::new(config.client_config())?;
            tracing::debug!(api_url = %client.base_url(), "Using HTTP backend");
            Arc::new(client)
        };

        Ok(Self { api })
    }
}
