use async_trait::async_trait;
use garth_model::{LoginRecord, User};
use uuid::Uuid;

use crate::error::Result;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<()>;
    async fn update(&self, user: &User) -> Result<bool>;
    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool>;
    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<User>>;
    async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<User>>;
    /// Usernames are the login key, so the check spans every hotel.
    async fn exists_by_username(&self, username: &str, exclude_id: Option<Uuid>) -> Result<bool>;
    async fn update_password(&self, user_id: Uuid, password_hash: &str) -> Result<bool>;
    async fn get_login_record(&self, username: &str) -> Result<Option<LoginRecord>>;
    async fn update_last_login(&self, user_id: Uuid) -> Result<()>;
}
