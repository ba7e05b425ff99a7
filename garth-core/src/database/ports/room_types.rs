use async_trait::async_trait;
use garth_model::RoomType;
use uuid::Uuid;

use crate::error::Result;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    async fn create(&self, room_type: &RoomType) -> Result<()>;
    async fn update(&self, room_type: &RoomType) -> Result<bool>;
    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool>;
    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<RoomType>>;
    async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<RoomType>>;
    async fn exists_by_code(
        &self,
        hotel_id: Uuid,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool>;
    async fn count_active_rooms(&self, hotel_id: Uuid, id: Uuid) -> Result<i64>;
}
