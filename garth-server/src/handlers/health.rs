use axum::{Json, extract::State};
use serde::Serialize;
use tracing::warn;

use garth_core::api_types::ApiResponse;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
    pub pool_size: u32,
    pub idle_connections: u32,
}

/// Liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HealthStatus>>> {
    if let Err(err) = state.postgres.ping().await {
        warn!(error = %err, "health check could not reach the database");
        return Err(AppError::service_unavailable("Base de datos no disponible"));
    }

    let stats = state.postgres.pool_stats();
    Ok(Json(ApiResponse::success(HealthStatus {
        status: "ok",
        database: "ok",
        pool_size: stats.size,
        idle_connections: stats.idle,
    })))
}
