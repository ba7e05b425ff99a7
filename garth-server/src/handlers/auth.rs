use axum::{Extension, Json, extract::State, http::header, response::IntoResponse};
use tracing::error;

use garth_core::{
    api_types::{
        ApiResponse,
        auth::{ChangePasswordRequest, LoginRequest, SessionInfo},
    },
    auth::{SessionClaims, SessionPermissions},
};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
    extract::ApiJson,
};

pub fn session_info(claims: &SessionClaims, permissions: &SessionPermissions) -> SessionInfo {
    SessionInfo {
        user_id: claims.user_id(),
        hotel_id: claims.hotel_id,
        role_id: claims.role_id,
        role_name: claims.role.clone(),
        full_name: claims.name.clone(),
        max_discount: claims.max_discount,
        is_admin: permissions.grants_all(),
        permissions: permissions.codes(),
    }
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = state.services.auth.login(request).await?;
    let permissions = state
        .services
        .auth
        .session_permissions(user.hotel_id, user.user_id, user.role_id)
        .await?;

    let (token, claims) = state.sessions.issue(&user).map_err(|err| {
        error!(error = %err, user_id = %user.user_id, "failed to issue session");
        AppError::internal("No se pudo iniciar la sesión")
    })?;

    let body = ApiResponse::success(session_info(&claims, &permissions))
        .with_message(format!("Bienvenido, {}", user.full_name));

    Ok((
        [(header::SET_COOKIE, state.sessions.session_cookie(&token))],
        Json(body),
    ))
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, state.sessions.clear_cookie())],
        Json(ApiResponse::ok("Sesión cerrada")),
    )
}

pub async fn me(
    Extension(claims): Extension<SessionClaims>,
    Extension(permissions): Extension<SessionPermissions>,
) -> Json<ApiResponse<SessionInfo>> {
    Json(ApiResponse::success(session_info(&claims, &permissions)))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .services
        .auth
        .change_password(claims.hotel_id, claims.user_id(), request)
        .await?;
    Ok(Json(ApiResponse::ok("Contraseña actualizada exitosamente")))
}
