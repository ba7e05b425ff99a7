use axum::{Extension, Json, extract::State, http::StatusCode};
use uuid::Uuid;

use garth_core::{
    api_types::{
        ApiResponse, ListQuery,
        roles::{
            CreateRoleRequest, PermissionModuleDto, RoleDto, SetRolePermissionsRequest,
            UpdateRoleRequest,
        },
    },
    auth::SessionClaims,
};

use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
};

pub async fn list_roles(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<RoleDto>>>> {
    let roles = state
        .services
        .roles
        .get_all(claims.hotel_id, query.include_inactive)
        .await?;
    Ok(Json(ApiResponse::success(roles)))
}

pub async fn get_role(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<RoleDto>>> {
    let role = state.services.roles.get_by_id(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::success(role)))
}

pub async fn create_role(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<CreateRoleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RoleDto>>)> {
    let role = state
        .services
        .roles
        .create(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(role).with_message("Rol creado exitosamente")),
    ))
}

pub async fn update_role(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateRoleRequest>,
) -> AppResult<Json<ApiResponse<RoleDto>>> {
    let role = state
        .services
        .roles
        .update(claims.hotel_id, id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(role).with_message("Rol actualizado exitosamente"),
    ))
}

pub async fn delete_role(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.roles.delete(claims.hotel_id, id).await?;
    Ok(Json(ApiResponse::ok("Rol eliminado exitosamente")))
}

/// Permission catalog grouped by module.
pub async fn list_permissions(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PermissionModuleDto>>>> {
    let catalog = state.services.roles.get_permission_catalog().await?;
    Ok(Json(ApiResponse::success(catalog)))
}

pub async fn get_role_permissions(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let codes = state
        .services
        .roles
        .get_role_permissions(claims.hotel_id, id)
        .await?;
    Ok(Json(ApiResponse::success(codes)))
}

pub async fn set_role_permissions(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<SetRolePermissionsRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .services
        .roles
        .set_role_permissions(claims.hotel_id, id, request.permission_codes)
        .await?;
    Ok(Json(ApiResponse::ok("Permisos actualizados exitosamente")))
}
