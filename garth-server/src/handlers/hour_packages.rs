use axum::{Extension, Json, extract::State, http::StatusCode};
use uuid::Uuid;

use garth_core::{
    api_types::{
        ApiResponse,
        hour_packages::{
            CreateHourPackageRequest, HourPackageDto, HourPackageQuery, UpdateHourPackageRequest,
        },
    },
    auth::SessionClaims,
};

use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{ApiJson, ApiPath, ApiQuery},
};

pub async fn list_hour_packages(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiQuery(query): ApiQuery<HourPackageQuery>,
) -> AppResult<Json<ApiResponse<Vec<HourPackageDto>>>> {
    let packages = state
        .services
        .hour_packages
        .get_all(claims.hotel_id, query)
        .await?;
    Ok(Json(ApiResponse::success(packages)))
}

pub async fn list_by_room_type(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(room_type_id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<HourPackageDto>>>> {
    let packages = state
        .services
        .hour_packages
        .get_by_room_type(claims.hotel_id, room_type_id)
        .await?;
    Ok(Json(ApiResponse::success(packages)))
}

pub async fn get_hour_package(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<HourPackageDto>>> {
    let package = state
        .services
        .hour_packages
        .get_by_id(claims.hotel_id, id)
        .await?;
    Ok(Json(ApiResponse::success(package)))
}

pub async fn create_hour_package(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<CreateHourPackageRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<HourPackageDto>>)> {
    let package = state
        .services
        .hour_packages
        .create(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(package).with_message("Paquete de horas creado exitosamente")),
    ))
}

pub async fn update_hour_package(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateHourPackageRequest>,
) -> AppResult<Json<ApiResponse<HourPackageDto>>> {
    let package = state
        .services
        .hour_packages
        .update(claims.hotel_id, id, request)
        .await?;
    Ok(Json(
        ApiResponse::success(package).with_message("Paquete de horas actualizado exitosamente"),
    ))
}

pub async fn delete_hour_package(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .services
        .hour_packages
        .delete(claims.hotel_id, id)
        .await?;
    Ok(Json(ApiResponse::ok("Paquete de horas eliminado exitosamente")))
}
