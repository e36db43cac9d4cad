//! System status shown on the home screen.

use serde::Serialize;

use crate::domain::HealthStatus;
use crate::error::ApiError;
use crate::ports::BlogApi;

pub const BACKEND_HINT: &str = "Make sure the backend is running on port 8000";

/// One line of the status board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentStatus {
    pub name: &'static str,
    pub ok: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub health: HealthStatus,
}

impl SystemStatus {
    /// Any failure is reported as the offline status.
    pub fn from_result(result: Result<HealthStatus, ApiError>) -> Self {
        let health = match result {
            Ok(health) => health,
            Err(err) => {
                tracing::warn!(error = %err, "Backend not available");
                HealthStatus::offline(err.to_string())
            }
        };
        Self { health }
    }

    pub async fn check(api: &dyn BlogApi) -> Self {
        Self::from_result(api.health().await)
    }

    pub fn components(&self) -> [ComponentStatus; 3] {
        let backend = self.health.is_backend_running();
        let database = self.health.is_database_connected();
        let ai = self.health.is_ai_configured();
        [
            ComponentStatus {
                name: "Backend API",
                ok: backend,
                label: if backend { "Running" } else { "Not Available" },
            },
            ComponentStatus {
                name: "Database",
                ok: database,
                label: if database { "Connected" } else { "Demo Mode" },
            },
            ComponentStatus {
                name: "AI Service",
                ok: ai,
                label: if ai { "Ready" } else { "Needs API Key" },
            },
        ]
    }

    /// Troubleshooting hint when the backend is down.
    pub fn hint(&self) -> Option<&'static str> {
        (!self.health.is_backend_running()).then_some(BACKEND_HINT)
    }
}
