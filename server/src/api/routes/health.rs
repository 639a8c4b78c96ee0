//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::PostgresService;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Shared state for the health endpoint
#[derive(Clone)]
pub struct HealthApiState {
    pub database: Arc<PostgresService>,
}

/// Build the health route
pub fn routes(database: Arc<PostgresService>) -> Router<()> {
    let state = HealthApiState { database };

    Router::new()
        .route("/api/v1/health", get(health))
        .with_state(state)
}

/// Overall status given database reachability
fn overall_status(database_up: bool) -> &'static str {
    if database_up { "ok" } else { "degraded" }
}

/// Health check endpoint
///
/// Reports the service version and whether the PostgreSQL pool answers a
/// probe query. A degraded database does not fail the request; the body
/// carries the state.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health with database state", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<HealthApiState>) -> impl IntoResponse {
    let pool = state.database.pool();
    let database_up = !pool.is_closed() && sqlx::query("SELECT 1").execute(pool).await.is_ok();

    if !database_up {
        tracing::warn!("Health check: database unreachable");
    }

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: overall_status(database_up),
            version: env!("CARGO_PKG_VERSION"),
            database: if database_up { "up" } else { "down" },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_degrades_when_database_is_down() {
        assert_eq!(overall_status(true), "ok");
        assert_eq!(overall_status(false), "degraded");
    }

    #[test]
    fn response_carries_database_state() {
        let body = serde_json::to_value(HealthResponse {
            status: "degraded",
            version: "0.1.0",
            database: "down",
        })
        .unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"], "down");
    }
}
