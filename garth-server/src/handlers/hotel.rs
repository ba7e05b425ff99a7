use axum::{Extension, Json, extract::State};

use garth_core::{
    api_types::{
        ApiResponse,
        hotel::{HotelSettingsDto, UpdateHotelSettingsRequest},
    },
    auth::SessionClaims,
};

use crate::infra::{app_state::AppState, errors::AppResult, extract::ApiJson};

pub async fn get_settings(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> AppResult<Json<ApiResponse<HotelSettingsDto>>> {
    let settings = state.services.hotel.get_settings(claims.hotel_id).await?;
    Ok(Json(ApiResponse::success(settings)))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<UpdateHotelSettingsRequest>,
) -> AppResult<Json<ApiResponse<HotelSettingsDto>>> {
    let settings = state
        .services
        .hotel
        .update_settings(claims.hotel_id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(settings).with_message("Configuración actualizada exitosamente"),
    ))
}
