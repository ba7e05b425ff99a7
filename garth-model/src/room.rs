use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, text_enum};

text_enum! {
    /// Housekeeping/operational state of a physical room.
    pub enum RoomStatus ("room status") {
        Available => "available",
        Occupied => "occupied",
        Dirty => "dirty",
        Cleaning => "cleaning",
        Maintenance => "maintenance",
        Blocked => "blocked",
    }
}

impl RoomStatus {
    /// Rooms in these states are not sellable and do not count towards
    /// occupancy.
    pub fn is_out_of_service(&self) -> bool {
        matches!(self, RoomStatus::Maintenance | RoomStatus::Blocked)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_type_id: Uuid,
    pub room_number: String,
    pub floor: Option<i32>,
    pub status: String,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    /// Joined from the room type for listings.
    #[cfg_attr(feature = "sqlx", sqlx(default))]
    pub room_type_name: Option<String>,
}

impl Room {
    pub fn status(&self) -> Result<RoomStatus> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(" Occupied ".parse::<RoomStatus>(), Ok(RoomStatus::Occupied));
        assert_eq!("BLOCKED".parse::<RoomStatus>(), Ok(RoomStatus::Blocked));
    }

    #[test]
    fn unknown_status_is_reported() {
        let err = "flooded".parse::<RoomStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown room status: `flooded`");
    }

    #[test]
    fn out_of_service_states() {
        assert!(RoomStatus::Maintenance.is_out_of_service());
        assert!(RoomStatus::Blocked.is_out_of_service());
        assert!(!RoomStatus::Dirty.is_out_of_service());
    }
}
