use async_trait::async_trait;
use garth_model::{Room, RoomStatus};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::rooms::{RoomFilter, RoomRepository};
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn create(&self, room: &Room) -> Result<()> {
        ProcedureCall::new("room_create")
            .arg("p_id", room.id)
            .arg("p_hotel_id", room.hotel_id)
            .arg("p_room_type_id", room.room_type_id)
            .arg("p_room_number", room.room_number.clone())
            .arg("p_floor", room.floor)
            .arg("p_status", room.status.clone())
            .arg("p_notes", room.notes.clone())
            .arg("p_created_by", room.created_by)
            .execute(self.pool())
            .await?;

        debug!(
            hotel_id = %room.hotel_id,
            id = %room.id,
            number = %room.room_number,
            "room created"
        );
        Ok(())
    }

    async fn update(&self, room: &Room) -> Result<bool> {
        let updated = ProcedureCall::new("room_update")
            .arg("p_id", room.id)
            .arg("p_hotel_id", room.hotel_id)
            .arg("p_room_type_id", room.room_type_id)
            .arg("p_room_number", room.room_number.clone())
            .arg("p_floor", room.floor)
            .arg("p_notes", room.notes.clone())
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool> {
        let deleted = ProcedureCall::new("room_soft_delete")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<Room>> {
        let room = ProcedureCall::new("room_get_by_id")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_optional::<Room>(self.pool())
            .await?;
        Ok(room)
    }

    async fn get_all(&self, hotel_id: Uuid, filter: &RoomFilter) -> Result<Vec<Room>> {
        let rooms = ProcedureCall::new("room_get_all")
            .arg("p_hotel_id", hotel_id)
            .arg("p_status", filter.status.map(|s| s.as_str().to_string()))
            .arg("p_room_type_id", filter.room_type_id)
            .arg("p_floor", filter.floor)
            .arg("p_include_inactive", filter.include_inactive)
            .fetch_all::<Room>(self.pool())
            .await?;
        Ok(rooms)
    }

    async fn exists_by_number(
        &self,
        hotel_id: Uuid,
        room_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool> {
        let exists = ProcedureCall::new("room_exists_by_number")
            .arg("p_hotel_id", hotel_id)
            .arg("p_room_number", room_number.to_string())
            .arg("p_exclude_id", exclude_id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(exists)
    }

    async fn update_status(&self, hotel_id: Uuid, id: Uuid, status: RoomStatus) -> Result<bool> {
        let updated = ProcedureCall::new("room_update_status")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .arg("p_status", status.as_str().to_string())
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }
}
