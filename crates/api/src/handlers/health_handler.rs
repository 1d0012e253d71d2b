//! `GET /health`: reports whether the user store answers.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use sea_orm::DbErr;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Degraded,
}

/// Outcome of pinging one dependency.
#[derive(Debug, Serialize)]
pub struct DependencyHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), DbErr>> for DependencyHealth {
    fn from(ping: Result<(), DbErr>) -> Self {
        match ping {
            Ok(()) => Self {
                status: HealthStatus::Healthy,
                error: None,
            },
            Err(e) => Self {
                status: HealthStatus::Unhealthy,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Dependencies {
    pub database: DependencyHealth,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub services: Dependencies,
}

impl HealthReport {
    pub fn new(database: DependencyHealth) -> Self {
        let status = match database.status {
            HealthStatus::Healthy => HealthStatus::Healthy,
            _ => HealthStatus::Degraded,
        };
        Self {
            status,
            services: Dependencies { database },
        }
    }

    /// 200 while everything answers, 503 otherwise.
    pub fn status_code(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            _ => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = HealthReport::new(state.database.ping().await.into());
    if report.status != HealthStatus::Healthy {
        tracing::warn!("Health check degraded: {:?}", report.services.database.error);
    }
    (report.status_code(), Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_report_omits_error() {
        let report = HealthReport::new(Ok(()).into());
        assert_eq!(report.status_code(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"status": "healthy", "services": {"database": {"status": "healthy"}}})
        );
    }

    #[test]
    fn failed_ping_degrades_with_error() {
        let report = HealthReport::new(Err(DbErr::Custom("connection refused".into())).into());
        assert_eq!(report.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "degraded");
        assert_eq!(value["services"]["database"]["status"], "unhealthy");
        assert!(value["services"]["database"]["error"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }
}
