use async_trait::async_trait;
use garth_model::Guest;
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestFilter {
    /// Matches name, email, phone or document number.
    pub search: Option<String>,
    pub include_inactive: bool,
}

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &Guest) -> Result<()>;
    async fn update(&self, guest: &Guest) -> Result<bool>;
    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool>;
    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<Guest>>;
    async fn get_all(&self, hotel_id: Uuid, filter: &GuestFilter) -> Result<Vec<Guest>>;
    async fn exists_by_document(
        &self,
        hotel_id: Uuid,
        document_type: &str,
        document_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool>;
    async fn set_blacklist(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        blacklisted: bool,
        reason: Option<String>,
    ) -> Result<bool>;
}
