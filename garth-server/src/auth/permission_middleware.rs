use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use garth_core::auth::{SessionClaims, SessionPermissions};
use std::future::Future;
use std::pin::Pin;
use tracing::info;

use crate::infra::errors::AppError;

/// Middleware that checks the session's role grants `permission`.
/// Must run after `auth_middleware`.
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>>
+ Clone
+ Send
+ Sync
+ 'static {
    move |request: Request, next: Next| Box::pin(check_permission(request, next, permission))
}

async fn check_permission(request: Request, next: Next, permission: &'static str) -> Response {
    let Some(claims) = request.extensions().get::<SessionClaims>() else {
        return AppError::unauthorized("Debe iniciar sesión").into_response();
    };

    let Some(permissions) = request.extensions().get::<SessionPermissions>() else {
        return AppError::internal("Permisos no cargados").into_response();
    };

    if !permissions.has(permission) {
        info!(user_id = %claims.user_id(), permission, "permission denied");
        return AppError::forbidden("No tiene permiso para realizar esta acción").into_response();
    }

    next.run(request).await
}
