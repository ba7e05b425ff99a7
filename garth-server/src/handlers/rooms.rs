use axum::{Extension, Json, extract::State, http::StatusCode};
use uuid::Uuid;

use garth_core::{
    api_types::{
        ApiResponse,
        rooms::{
            ChangeRoomStatusRequest, CreateRoomRequest, RoomDto, RoomFormOptions, RoomQuery,
            UpdateRoomRequest,
        },
    },
    auth::SessionClaims,
};

use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
};

pub async fn list_rooms(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiQuery(query): ApiQuery<RoomQuery>,
) -> AppResult<Json<ApiResponse<Vec<RoomDto>>>> {
    let rooms = state.services.rooms.get_all(claims.hotel_id, query).await?;
    Ok(Json(ApiResponse::success(rooms)))
}

pub async fn get_room(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<RoomDto>>> {
    let room = state.services.rooms.get_by_id(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::success(room)))
}

/// Lookup data for the create/edit room dialog.
pub async fn form_options(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> AppResult<Json<ApiResponse<RoomFormOptions>>> {
    let options = state.services.rooms.form_options(claims.hotel_id).await?;
    Ok(Json(ApiResponse::success(options)))
}

pub async fn create_room(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RoomDto>>)> {
    let room = state
        .services
        .rooms
        .create(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(room).with_message("Habitación creada exitosamente")),
    ))
}

pub async fn update_room(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateRoomRequest>,
) -> AppResult<Json<ApiResponse<RoomDto>>> {
    let room = state
        .services
        .rooms
        .update(claims.hotel_id, id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(room).with_message("Habitación actualizada exitosamente"),
    ))
}

pub async fn change_status(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<ChangeRoomStatusRequest>,
) -> AppResult<Json<ApiResponse<RoomDto>>> {
    let room = state
        .services
        .rooms
        .change_status(claims.hotel_id, id, request.status)
        .await?;
    Ok(Json(
        ApiResponse::success(room).with_message("Estado de la habitación actualizado"),
    ))
}

pub async fn delete_room(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.rooms.delete(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::ok("Habitación eliminada exitosamente")))
}
