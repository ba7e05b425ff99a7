use async_trait::async_trait;
use garth_model::Guest;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::guests::{GuestFilter, GuestRepository};
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

/// PostgreSQL-backed implementation of the `GuestRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresGuestRepository {
    pool: PgPool,
}

impl PostgresGuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepository {
    async fn create(&self, guest: &Guest) -> Result<()> {
        ProcedureCall::new("guest_create")
            .arg("p_id", guest.id)
            .arg("p_hotel_id", guest.hotel_id)
            .arg("p_first_name", guest.first_name.clone())
            .arg("p_last_name", guest.last_name.clone())
            .arg("p_email", guest.email.clone())
            .arg("p_phone", guest.phone.clone())
            .arg("p_document_type", guest.document_type.clone())
            .arg("p_document_number", guest.document_number.clone())
            .arg("p_nationality", guest.nationality.clone())
            .arg("p_birth_date", guest.birth_date)
            .arg("p_address", guest.address.clone())
            .arg("p_notes", guest.notes.clone())
            .arg("p_is_vip", guest.is_vip)
            .arg("p_created_by", guest.created_by)
            .execute(self.pool())
            .await?;

        debug!(hotel_id = %guest.hotel_id, id = %guest.id, "guest created");
        Ok(())
    }

    async fn update(&self, guest: &Guest) -> Result<bool> {
        let updated = ProcedureCall::new("guest_update")
            .arg("p_id", guest.id)
            .arg("p_hotel_id", guest.hotel_id)
            .arg("p_first_name", guest.first_name.clone())
            .arg("p_last_name", guest.last_name.clone())
            .arg("p_email", guest.email.clone())
            .arg("p_phone", guest.phone.clone())
            .arg("p_document_type", guest.document_type.clone())
            .arg("p_document_number", guest.document_number.clone())
            .arg("p_nationality", guest.nationality.clone())
            .arg("p_birth_date", guest.birth_date)
            .arg("p_address", guest.address.clone())
            .arg("p_notes", guest.notes.clone())
            .arg("p_is_vip", guest.is_vip)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool> {
        let deleted = ProcedureCall::new("guest_soft_delete")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<Guest>> {
        let guest = ProcedureCall::new("guest_get_by_id")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_optional::<Guest>(self.pool())
            .await?;
        Ok(guest)
    }

    async fn get_all(&self, hotel_id: Uuid, filter: &GuestFilter) -> Result<Vec<Guest>> {
        let guests = ProcedureCall::new("guest_get_all")
            .arg("p_hotel_id", hotel_id)
            .arg("p_search", filter.search.clone())
            .arg("p_include_inactive", filter.include_inactive)
            .fetch_all::<Guest>(self.pool())
            .await?;
        Ok(guests)
    }

    async fn exists_by_document(
        &self,
        hotel_id: Uuid,
        document_type: &str,
        document_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool> {
        let exists = ProcedureCall::new("guest_exists_by_document")
            .arg("p_hotel_id", hotel_id)
            .arg("p_document_type", document_type.to_string())
            .arg("p_document_number", document_number.to_string())
            .arg("p_exclude_id", exclude_id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(exists)
    }

    async fn set_blacklist(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        blacklisted: bool,
        reason: Option<String>,
    ) -> Result<bool> {
        let updated = ProcedureCall::new("guest_set_blacklist")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .arg("p_is_blacklisted", blacklisted)
            .arg("p_reason", reason)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }
}
