use chrono::{DateTime, Utc};
use garth_model::{Permission, Role};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(max = 50, message = "El nombre no puede exceder 50 caracteres"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub max_discount_percent: Decimal,
}

pub type UpdateRoleRequest = CreateRoleRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct SetRolePermissionsRequest {
    #[serde(default)]
    pub permission_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub max_discount_percent: Decimal,
    pub is_system: bool,
    pub is_active: bool,
    pub user_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            max_discount_percent: role.max_discount_percent,
            is_system: role.is_system,
            is_active: role.is_active,
            user_count: role.user_count.unwrap_or(0),
            created_at: role.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub module: String,
    pub description: Option<String>,
}

impl From<Permission> for PermissionDto {
    fn from(permission: Permission) -> Self {
        Self {
            id: permission.id,
            code: permission.code,
            name: permission.name,
            module: permission.module,
            description: permission.description,
        }
    }
}

/// Catalog section for one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionModuleDto {
    pub module: String,
    pub permissions: Vec<PermissionDto>,
}
