use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "El usuario es requerido"))]
    pub username: String,
    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "La contraseña actual es requerida"))]
    pub current_password: String,
    #[validate(length(
        min = 8,
        message = "La nueva contraseña debe tener al menos 8 caracteres"
    ))]
    pub new_password: String,
}

/// Identity established by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub hotel_id: Uuid,
    pub role_id: Uuid,
    pub username: String,
    pub role_name: String,
    pub full_name: String,
    pub max_discount: Decimal,
}

/// `GET /auth/me` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: Uuid,
    pub hotel_id: Uuid,
    pub role_id: Uuid,
    pub role_name: String,
    pub full_name: String,
    pub max_discount: Decimal,
    pub is_admin: bool,
    pub permissions: Vec<String>,
}
