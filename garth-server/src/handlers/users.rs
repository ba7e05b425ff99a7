use axum::{Extension, Json, extract::State, http::StatusCode};
use uuid::Uuid;

use garth_core::{
    api_types::{
        ApiResponse, ListQuery,
        users::{
            CreateUserRequest, ResetPasswordRequest, UpdateUserRequest, UserDto, UserFormOptions,
        },
    },
    auth::SessionClaims,
};

use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
};

pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<UserDto>>>> {
    let users = state
        .services
        .users
        .get_all(claims.hotel_id, query.include_inactive)
        .await?;
    Ok(Json(ApiResponse::success(users)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<UserDto>>> {
    let user = state.services.users.get_by_id(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// Role lookup for the create/edit user dialog.
pub async fn form_options(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> AppResult<Json<ApiResponse<UserFormOptions>>> {
    let options = state.services.users.form_options(claims.hotel_id).await?;
    Ok(Json(ApiResponse::success(options)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let user = state
        .services
        .users
        .create(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user).with_message("Usuario creado exitosamente")),
    ))
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserDto>>> {
    let user = state
        .services
        .users
        .update(claims.hotel_id, claims.user_id(), id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(user).with_message("Usuario actualizado exitosamente"),
    ))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .services
        .users
        .delete(claims.hotel_id, claims.user_id(), id)
        .await?;
    Ok(Json(ApiResponse::ok("Usuario eliminado exitosamente")))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<ResetPasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .services
        .users
        .reset_password(claims.hotel_id, id, request)
        .await?;
    Ok(Json(ApiResponse::ok("Contraseña restablecida exitosamente")))
}
