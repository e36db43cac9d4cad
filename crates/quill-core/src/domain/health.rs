use serde::{Deserialize, Serialize};

/// Backend health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
    pub ai_service: String,
    pub backend: String,
    pub database_healthy: Option<bool>,
    pub timestamp: Option<String>,
    pub error: Option<String>,
}

impl HealthStatus {
    /// Status reported when the backend could not be asked at all.
    pub fn offline(error: impl Into<String>) -> Self {
        Self {
            status: "offline".to_string(),
            database: "unknown".to_string(),
            ai_service: "unknown".to_string(),
            backend: "not_responding".to_string(),
            database_healthy: None,
            timestamp: None,
            error: Some(error.into()),
        }
    }

    pub fn is_backend_running(&self) -> bool {
        self.backend == "running"
    }

    pub fn is_database_connected(&self) -> bool {
        self.database == "connected"
    }

    pub fn is_ai_configured(&self) -> bool {
        self.ai_service == "configured"
    }
}
