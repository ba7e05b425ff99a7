use async_trait::async_trait;
use garth_model::RoomType;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::room_types::RoomTypeRepository;
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresRoomTypeRepository {
    pool: PgPool,
}

impl PostgresRoomTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RoomTypeRepository for PostgresRoomTypeRepository {
    async fn create(&self, room_type: &RoomType) -> Result<()> {
        ProcedureCall::new("room_type_create")
            .arg("p_id", room_type.id)
            .arg("p_hotel_id", room_type.hotel_id)
            .arg("p_code", room_type.code.clone())
            .arg("p_name", room_type.name.clone())
            .arg("p_description", room_type.description.clone())
            .arg("p_base_capacity", room_type.base_capacity)
            .arg("p_max_capacity", room_type.max_capacity)
            .arg("p_base_price_night", room_type.base_price_night)
            .arg("p_extra_person_price", room_type.extra_person_price)
            .arg("p_allows_hourly", room_type.allows_hourly)
            .arg("p_allows_nightly", room_type.allows_nightly)
            .arg("p_sort_order", room_type.sort_order)
            .arg("p_amenities", room_type.amenities.clone())
            .arg("p_photo_urls", room_type.photo_urls.clone())
            .arg("p_created_by", room_type.created_by)
            .execute(self.pool())
            .await?;

        debug!(hotel_id = %room_type.hotel_id, id = %room_type.id, "room type created");
        Ok(())
    }

    async fn update(&self, room_type: &RoomType) -> Result<bool> {
        let updated = ProcedureCall::new("room_type_update")
            .arg("p_id", room_type.id)
            .arg("p_hotel_id", room_type.hotel_id)
            .arg("p_code", room_type.code.clone())
            .arg("p_name", room_type.name.clone())
            .arg("p_description", room_type.description.clone())
            .arg("p_base_capacity", room_type.base_capacity)
            .arg("p_max_capacity", room_type.max_capacity)
            .arg("p_base_price_night", room_type.base_price_night)
            .arg("p_extra_person_price", room_type.extra_person_price)
            .arg("p_allows_hourly", room_type.allows_hourly)
            .arg("p_allows_nightly", room_type.allows_nightly)
            .arg("p_sort_order", room_type.sort_order)
            .arg("p_amenities", room_type.amenities.clone())
            .arg("p_photo_urls", room_type.photo_urls.clone())
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool> {
        let deleted = ProcedureCall::new("room_type_soft_delete")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<RoomType>> {
        let room_type = ProcedureCall::new("room_type_get_by_id")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_optional::<RoomType>(self.pool())
            .await?;
        Ok(room_type)
    }

    async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<RoomType>> {
        let room_types = ProcedureCall::new("room_type_get_all")
            .arg("p_hotel_id", hotel_id)
            .arg("p_include_inactive", include_inactive)
            .fetch_all::<RoomType>(self.pool())
            .await?;
        Ok(room_types)
    }

    async fn exists_by_code(
        &self,
        hotel_id: Uuid,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool> {
        let exists = ProcedureCall::new("room_type_exists_by_code")
            .arg("p_hotel_id", hotel_id)
            .arg("p_code", code.to_string())
            .arg("p_exclude_id", exclude_id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(exists)
    }

    async fn count_active_rooms(&self, hotel_id: Uuid, id: Uuid) -> Result<i64> {
        let count = ProcedureCall::new("room_type_count_active_rooms")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<i64>(self.pool())
            .await?;
        Ok(count)
    }
}
