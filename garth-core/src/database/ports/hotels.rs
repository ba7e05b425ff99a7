use async_trait::async_trait;
use garth_model::Hotel;
use uuid::Uuid;

use crate::error::Result;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn get_by_id(&self, hotel_id: Uuid) -> Result<Option<Hotel>>;

    /// Persist the editable settings of `hotel`. Returns `false` when the
    /// hotel does not exist.
    async fn update_settings(&self, hotel: &Hotel) -> Result<bool>;
}
