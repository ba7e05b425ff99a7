use axum::{Extension, Json, extract::State, http::StatusCode};
use uuid::Uuid;

use garth_core::{
    api_types::{
        ApiResponse,
        guests::{BlacklistRequest, CreateGuestRequest, GuestDto, GuestQuery, UpdateGuestRequest},
    },
    auth::SessionClaims,
};

use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
};

pub async fn list_guests(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiQuery(query): ApiQuery<GuestQuery>,
) -> AppResult<Json<ApiResponse<Vec<GuestDto>>>> {
    let guests = state.services.guests.get_all(claims.hotel_id, query).await?;
    Ok(Json(ApiResponse::success(guests)))
}

pub async fn get_guest(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<GuestDto>>> {
    let guest = state.services.guests.get_by_id(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::success(guest)))
}

pub async fn create_guest(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<CreateGuestRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<GuestDto>>)> {
    let guest = state
        .services
        .guests
        .create(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(guest).with_message("Huésped creado exitosamente")),
    ))
}

pub async fn update_guest(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateGuestRequest>,
) -> AppResult<Json<ApiResponse<GuestDto>>> {
    let guest = state
        .services
        .guests
        .update(claims.hotel_id, id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(guest).with_message("Huésped actualizado exitosamente"),
    ))
}

pub async fn delete_guest(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.guests.delete(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::ok("Huésped eliminado exitosamente")))
}

pub async fn set_blacklist(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<BlacklistRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let blacklisted = request.is_blacklisted;
    state
        .services
        .guests
        .set_blacklisted(claims.hotel_id, id, blacklisted, request.reason)
        .await?;

    let message = if blacklisted {
        "Huésped agregado a la lista negra"
    } else {
        "Huésped removido de la lista negra"
    };
    Ok(Json(ApiResponse::ok(message)))
}
