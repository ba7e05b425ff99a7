use chrono::{DateTime, Utc};
use garth_model::{Room, RoomStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::LookupItem;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    pub room_type_id: Uuid,
    #[validate(length(
        max = 10,
        message = "El número de habitación no puede exceder 10 caracteres"
    ))]
    pub room_number: String,
    pub floor: Option<i32>,
    pub notes: Option<String>,
}

pub type UpdateRoomRequest = CreateRoomRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRoomStatusRequest {
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomQuery {
    pub status: Option<RoomStatus>,
    pub room_type_id: Option<Uuid>,
    pub floor: Option<i32>,
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: Uuid,
    pub room_type_id: Uuid,
    pub room_type_name: Option<String>,
    pub room_number: String,
    pub floor: Option<i32>,
    pub status: String,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            room_type_id: room.room_type_id,
            room_type_name: room.room_type_name,
            room_number: room.room_number,
            floor: room.floor,
            status: room.status,
            notes: room.notes,
            is_active: room.is_active,
            created_at: room.created_at,
        }
    }
}

/// Lookups for the room create/edit dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFormOptions {
    pub room_types: Vec<LookupItem>,
    pub statuses: Vec<String>,
}
