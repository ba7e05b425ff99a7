use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A staff account. `username` is the login key and is unique across all
/// hotels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub role_id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub full_name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    #[cfg_attr(feature = "sqlx", sqlx(default))]
    pub role_name: Option<String>,
}

/// Login lookup row: the user joined with its role and hotel state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LoginRecord {
    pub user_id: Uuid,
    pub hotel_id: Uuid,
    pub role_id: Uuid,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub user_active: bool,
    pub role_name: String,
    pub role_active: bool,
    pub max_discount_percent: Decimal,
    pub hotel_active: bool,
}
