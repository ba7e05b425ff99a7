use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::session::extract_session_token;
use crate::infra::{app_state::AppState, errors::AppError};

/// Validate the session cookie and attach the caller's claims and
/// permissions to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_session_token(request.headers()) else {
        return AppError::unauthorized("Debe iniciar sesión").into_response();
    };

    let claims = match state.sessions.verify(&token) {
        Ok(claims) => claims,
        Err(err) => {
            debug!(error = %err, "rejected session cookie");
            return AppError::unauthorized("La sesión expiró o no es válida").into_response();
        }
    };

    let permissions = match state
        .services
        .auth
        .session_permissions(claims.hotel_id, claims.user_id(), claims.role_id)
        .await
    {
        Ok(permissions) => permissions,
        Err(err) => return AppError::from(err).into_response(),
    };

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(permissions);
    next.run(request).await
}
