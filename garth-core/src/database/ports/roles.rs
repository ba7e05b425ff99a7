use async_trait::async_trait;
use garth_model::{Permission, Role};
use uuid::Uuid;

use crate::error::Result;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create(&self, role: &Role) -> Result<()>;
    async fn update(&self, role: &Role) -> Result<bool>;
    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool>;
    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<Role>>;
    async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<Role>>;
    /// Case-insensitive name check within the hotel.
    async fn exists_by_name(
        &self,
        hotel_id: Uuid,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool>;
    async fn count_users(&self, hotel_id: Uuid, role_id: Uuid) -> Result<i64>;
    async fn get_permissions(&self, hotel_id: Uuid, role_id: Uuid) -> Result<Vec<String>>;
    /// Replace the role's permission set with `codes`.
    async fn set_permissions(
        &self,
        hotel_id: Uuid,
        role_id: Uuid,
        codes: Vec<String>,
    ) -> Result<()>;
    async fn get_all_permissions(&self) -> Result<Vec<Permission>>;
}
