use chrono::{DateTime, Utc};
use garth_model::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::LookupItem;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub role_id: Uuid,
    pub username: String,
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: Option<String>,
    #[validate(length(max = 150, message = "El nombre no puede exceder 150 caracteres"))]
    pub full_name: String,
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub role_id: Uuid,
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: Option<String>,
    #[validate(length(max = 150, message = "El nombre no puede exceder 150 caracteres"))]
    pub full_name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub new_password: String,
}

/// User as shown to clients. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub role_id: Uuid,
    pub role_name: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub full_name: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            role_id: user.role_id,
            role_name: user.role_name,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFormOptions {
    pub roles: Vec<LookupItem>,
}
