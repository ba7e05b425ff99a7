use axum::{Extension, Json, extract::State, http::StatusCode};
use uuid::Uuid;

use garth_core::{
    api_types::{
        ApiResponse, ListQuery,
        room_types::{CreateRoomTypeRequest, RoomTypeDto, UpdateRoomTypeRequest},
    },
    auth::SessionClaims,
};

use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
};

pub async fn list_room_types(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<RoomTypeDto>>>> {
    let room_types = state
        .services
        .room_types
        .get_all(claims.hotel_id, query.include_inactive)
        .await?;
    Ok(Json(ApiResponse::success(room_types)))
}

pub async fn get_room_type(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<RoomTypeDto>>> {
    let room_type = state.services.room_types.get_by_id(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::success(room_type)))
}

pub async fn create_room_type(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<CreateRoomTypeRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RoomTypeDto>>)> {
    let room_type = state
        .services
        .room_types
        .create(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::success(room_type).with_message("Tipo de habitación creado exitosamente"),
        ),
    ))
}

pub async fn update_room_type(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateRoomTypeRequest>,
) -> AppResult<Json<ApiResponse<RoomTypeDto>>> {
    let room_type = state
        .services
        .room_types
        .update(claims.hotel_id, id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(room_type).with_message("Tipo de habitación actualizado exitosamente"),
    ))
}

pub async fn delete_room_type(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.room_types.delete(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::ok("Tipo de habitación eliminado exitosamente")))
}
