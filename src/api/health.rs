//! Liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::warn;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Probe body; `checks` is only present on `/ready`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<ComponentCheck>,
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub name: &'static str,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub latency_ms: u64,
}

impl HealthResponse {
    fn new(checks: Vec<ComponentCheck>) -> Self {
        let status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// GET /health - process is up
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::new(Vec::new()))
}

/// GET /live - bare 200 for orchestrator liveness probes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /ready - 503 until the user store answers
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse::new(vec![check_user_store(&state).await]);

    (response.status_code(), Json(response))
}

async fn check_user_store(state: &AppState) -> ComponentCheck {
    let start = Instant::now();
    let result = state.account_service.count().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => ComponentCheck {
            name: "user_store",
            status: HealthStatus::Healthy,
            message: None,
            latency_ms,
        },
        Err(e) => {
            warn!(error = %e, "User store readiness check failed");

            ComponentCheck {
                name: "user_store",
                status: HealthStatus::Unhealthy,
                message: Some("User store unavailable"),
                latency_ms,
            }
        }
    }
}
