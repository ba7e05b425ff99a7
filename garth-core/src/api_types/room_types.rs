use chrono::{DateTime, Utc};
use garth_model::RoomType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomTypeRequest {
    #[validate(length(max = 20, message = "El código no puede exceder 20 caracteres"))]
    pub code: String,
    #[validate(length(max = 100, message = "El nombre no puede exceder 100 caracteres"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "La capacidad base debe ser al menos 1"))]
    pub base_capacity: i32,
    pub max_capacity: i32,
    pub base_price_night: Decimal,
    #[serde(default)]
    pub extra_person_price: Decimal,
    #[serde(default)]
    pub allows_hourly: bool,
    #[serde(default = "default_true")]
    pub allows_nightly: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

pub type UpdateRoomTypeRequest = CreateRoomTypeRequest;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub base_capacity: i32,
    pub max_capacity: i32,
    pub base_price_night: Decimal,
    pub extra_person_price: Decimal,
    pub allows_hourly: bool,
    pub allows_nightly: bool,
    pub sort_order: i32,
    pub amenities: Vec<String>,
    pub photo_urls: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RoomType> for RoomTypeDto {
    fn from(room_type: RoomType) -> Self {
        Self {
            amenities: room_type.amenities(),
            photo_urls: room_type.photo_urls(),
            id: room_type.id,
            code: room_type.code,
            name: room_type.name,
            description: room_type.description,
            base_capacity: room_type.base_capacity,
            max_capacity: room_type.max_capacity,
            base_price_night: room_type.base_price_night,
            extra_person_price: room_type.extra_person_price,
            allows_hourly: room_type.allows_hourly,
            allows_nightly: room_type.allows_nightly,
            sort_order: room_type.sort_order,
            is_active: room_type.is_active,
            created_at: room_type.created_at,
        }
    }
}
