use async_trait::async_trait;
use garth_model::{Room, RoomStatus};
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub room_type_id: Option<Uuid>,
    pub floor: Option<i32>,
    pub include_inactive: bool,
}

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &Room) -> Result<()>;
    async fn update(&self, room: &Room) -> Result<bool>;
    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool>;
    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<Room>>;
    async fn get_all(&self, hotel_id: Uuid, filter: &RoomFilter) -> Result<Vec<Room>>;
    async fn exists_by_number(
        &self,
        hotel_id: Uuid,
        room_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool>;
    async fn update_status(&self, hotel_id: Uuid, id: Uuid, status: RoomStatus) -> Result<bool>;
}
