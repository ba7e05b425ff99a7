use async_trait::async_trait;
use garth_model::HourPackage;
use uuid::Uuid;

use crate::error::Result;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait HourPackageRepository: Send + Sync {
    async fn create(&self, package: &HourPackage) -> Result<()>;
    async fn update(&self, package: &HourPackage) -> Result<bool>;
    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool>;
    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<HourPackage>>;
    async fn get_all(
        &self,
        hotel_id: Uuid,
        room_type_id: Option<Uuid>,
        include_inactive: bool,
    ) -> Result<Vec<HourPackage>>;
    /// Whether an active package already covers `hours` for the room type.
    async fn exists(
        &self,
        hotel_id: Uuid,
        room_type_id: Uuid,
        hours: i32,
        exclude_id: Option<Uuid>,
    ) -> Result<bool>;
}
