use axum::{Extension, Json, extract::State};

use garth_core::{api_types::ApiResponse, auth::SessionClaims};
use garth_model::{DashboardComplete, DashboardMetrics};

use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> AppResult<Json<ApiResponse<DashboardComplete>>> {
    let dashboard = state
        .services
        .dashboard
        .get_dashboard_complete(claims.hotel_id)
        .await?;
    Ok(Json(ApiResponse::success(dashboard)))
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> AppResult<Json<ApiResponse<DashboardMetrics>>> {
    let metrics = state.services.dashboard.get_metrics(claims.hotel_id).await?;
    Ok(Json(ApiResponse::success(metrics)))
}
