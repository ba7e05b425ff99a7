use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::Guest;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::clean;
use crate::api_types::guests::{CreateGuestRequest, GuestDto, GuestQuery, UpdateGuestRequest};
use crate::application::validation::required;
use crate::database::ports::guests::{GuestFilter, GuestRepository};
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Huésped no encontrado";
const DUPLICATE_DOCUMENT: &str = "Ya existe un huésped registrado con ese documento";

#[derive(Clone)]
pub struct GuestService {
    guests: Arc<dyn GuestRepository>,
}

impl fmt::Debug for GuestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestService")
            .field("guests_repo", &Arc::strong_count(&self.guests))
            .finish()
    }
}

/// Cleaned guest fields, ready to persist.
struct GuestInput {
    first_name: String,
    last_name: String,
    request: CreateGuestRequest,
}

impl GuestService {
    pub fn new(guests: Arc<dyn GuestRepository>) -> Self {
        Self { guests }
    }

    pub async fn create(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        request: CreateGuestRequest,
    ) -> Result<GuestDto> {
        let input = Self::prepare(request)?;
        self.ensure_unique_document(hotel_id, &input.request, None)
            .await?;

        let now = Utc::now();
        let request = input.request;
        let guest = Guest {
            id: Uuid::now_v7(),
            hotel_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: request.email,
            phone: request.phone,
            document_type: request.document_type,
            document_number: request.document_number,
            nationality: request.nationality,
            birth_date: request.birth_date,
            address: request.address,
            notes: request.notes,
            is_vip: request.is_vip,
            is_blacklisted: false,
            blacklist_reason: None,
            total_stays: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
        };

        self.guests
            .create(&guest)
            .await
            .map_err(|e| e.or_internal("Error al crear el huésped"))?;

        info!(%hotel_id, id = %guest.id, "guest created");
        Ok(guest.into())
    }

    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        request: UpdateGuestRequest,
    ) -> Result<GuestDto> {
        let input = Self::prepare(request)?;
        let mut guest = self.find(hotel_id, id).await?;
        self.ensure_unique_document(hotel_id, &input.request, Some(id))
            .await?;

        let request = input.request;
        guest.first_name = input.first_name;
        guest.last_name = input.last_name;
        guest.email = request.email;
        guest.phone = request.phone;
        guest.document_type = request.document_type;
        guest.document_number = request.document_number;
        guest.nationality = request.nationality;
        guest.birth_date = request.birth_date;
        guest.address = request.address;
        guest.notes = request.notes;
        guest.is_vip = request.is_vip;
        guest.updated_at = Utc::now();

        let updated = self
            .guests
            .update(&guest)
            .await
            .map_err(|e| e.or_internal("Error al actualizar el huésped"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "guest updated");
        Ok(guest.into())
    }

    pub async fn delete(&self, hotel_id: Uuid, id: Uuid) -> Result<()> {
        let deleted = self
            .guests
            .soft_delete(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el huésped"))?;
        if !deleted {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "guest deactivated");
        Ok(())
    }

    pub async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<GuestDto> {
        Ok(self.find(hotel_id, id).await?.into())
    }

    pub async fn get_all(&self, hotel_id: Uuid, query: GuestQuery) -> Result<Vec<GuestDto>> {
        let filter = GuestFilter {
            search: clean(query.search),
            include_inactive: query.include_inactive,
        };

        let guests = self
            .guests
            .get_all(hotel_id, &filter)
            .await
            .map_err(|e| e.or_internal("Error al obtener los huéspedes"))?;
        Ok(guests.into_iter().map(GuestDto::from).collect())
    }

    /// Flag or clear a guest on the hotel's blacklist. Flagging needs a
    /// reason; clearing drops the stored one.
    pub async fn set_blacklisted(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        blacklisted: bool,
        reason: Option<String>,
    ) -> Result<()> {
        let reason = if blacklisted {
            let reason = clean(reason).ok_or_else(|| {
                HmsError::validation("Debe indicar el motivo del bloqueo")
            })?;
            Some(reason)
        } else {
            None
        };

        let updated = self
            .guests
            .set_blacklist(hotel_id, id, blacklisted, reason)
            .await
            .map_err(|e| e.or_internal("Error al actualizar el huésped"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, blacklisted, "guest blacklist flag changed");
        Ok(())
    }

    async fn find(&self, hotel_id: Uuid, id: Uuid) -> Result<Guest> {
        self.guests
            .get_by_id(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al obtener el huésped"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))
    }

    fn prepare(mut request: CreateGuestRequest) -> Result<GuestInput> {
        request.email = clean(request.email);
        request.phone = clean(request.phone);
        request.document_type = clean(request.document_type);
        request.document_number = clean(request.document_number);
        request.nationality = clean(request.nationality);
        request.address = clean(request.address);
        request.notes = clean(request.notes);
        request.validate()?;

        let first_name = required(&request.first_name, "El nombre es requerido")?;
        let last_name = required(&request.last_name, "Los apellidos son requeridos")?;

        Ok(GuestInput {
            first_name,
            last_name,
            request,
        })
    }

    async fn ensure_unique_document(
        &self,
        hotel_id: Uuid,
        request: &CreateGuestRequest,
        exclude_id: Option<Uuid>,
    ) -> Result<()> {
        let (Some(document_type), Some(document_number)) =
            (&request.document_type, &request.document_number)
        else {
            return Ok(());
        };

        let exists = self
            .guests
            .exists_by_document(hotel_id, document_type, document_number, exclude_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el documento del huésped"))?;
        if exists {
            return Err(HmsError::conflict(DUPLICATE_DOCUMENT));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support;
    use crate::database::ports::guests::MockGuestRepository;

    fn request() -> CreateGuestRequest {
        CreateGuestRequest {
            first_name: " Ana ".into(),
            last_name: "López".into(),
            email: Some("ana@example.com".into()),
            document_type: Some("INE".into()),
            document_number: Some("ABC123".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_persists_a_trimmed_guest() {
        let hotel_id = Uuid::now_v7();
        let actor = Uuid::now_v7();

        let mut guests = MockGuestRepository::new();
        guests
            .expect_exists_by_document()
            .withf(move |h, t, n, ex| *h == hotel_id && t == "INE" && n == "ABC123" && ex.is_none())
            .returning(|_, _, _, _| Ok(false));
        guests
            .expect_create()
            .withf(move |g| {
                g.hotel_id == hotel_id && g.first_name == "Ana" && g.created_by == Some(actor)
            })
            .times(1)
            .returning(|_| Ok(()));

        let dto = GuestService::new(Arc::new(guests))
            .create(hotel_id, actor, request())
            .await
            .unwrap();
        assert_eq!(dto.full_name, "Ana López");
        assert!(dto.is_active);
    }

    #[tokio::test]
    async fn duplicate_document_is_a_conflict() {
        let mut guests = MockGuestRepository::new();
        guests
            .expect_exists_by_document()
            .returning(|_, _, _, _| Ok(true));
        guests.expect_create().never();

        let err = GuestService::new(Arc::new(guests))
            .create(Uuid::now_v7(), Uuid::now_v7(), request())
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Conflict(ref m) if m == DUPLICATE_DOCUMENT));
    }

    #[tokio::test]
    async fn names_and_email_are_validated() {
        let svc = GuestService::new(Arc::new(MockGuestRepository::new()));

        let mut blank = request();
        blank.first_name = "  ".into();
        assert!(matches!(
            svc.create(Uuid::now_v7(), Uuid::now_v7(), blank).await,
            Err(HmsError::Validation(_))
        ));

        let mut bad_email = request();
        bad_email.email = Some("no-es-correo".into());
        assert!(matches!(
            svc.create(Uuid::now_v7(), Uuid::now_v7(), bad_email).await,
            Err(HmsError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_excludes_itself_from_the_duplicate_check() {
        let hotel_id = Uuid::now_v7();
        let existing = test_support::guest(hotel_id);
        let id = existing.id;

        let mut guests = MockGuestRepository::new();
        guests
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(existing.clone())));
        guests
            .expect_exists_by_document()
            .withf(move |_, _, _, ex| *ex == Some(id))
            .returning(|_, _, _, _| Ok(false));
        guests.expect_update().times(1).returning(|_| Ok(true));

        let dto = GuestService::new(Arc::new(guests))
            .update(hotel_id, id, request())
            .await
            .unwrap();
        assert_eq!(dto.id, id);
    }

    #[tokio::test]
    async fn other_tenants_guest_is_not_found() {
        let mut guests = MockGuestRepository::new();
        guests.expect_get_by_id().returning(|_, _| Ok(None));

        let err = GuestService::new(Arc::new(guests))
            .get_by_id(Uuid::now_v7(), Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_soft() {
        let hotel_id = Uuid::now_v7();
        let id = Uuid::now_v7();

        let mut guests = MockGuestRepository::new();
        guests
            .expect_soft_delete()
            .withf(move |h, i| *h == hotel_id && *i == id)
            .times(1)
            .returning(|_, _| Ok(true));

        GuestService::new(Arc::new(guests))
            .delete(hotel_id, id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn blacklisting_needs_a_reason() {
        let mut guests = MockGuestRepository::new();
        guests.expect_set_blacklist().never();

        let err = GuestService::new(Arc::new(guests))
            .set_blacklisted(Uuid::now_v7(), Uuid::now_v7(), true, Some("  ".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Validation(_)));
    }

    #[tokio::test]
    async fn clearing_the_blacklist_drops_the_reason() {
        let mut guests = MockGuestRepository::new();
        guests
            .expect_set_blacklist()
            .withf(|_, _, flag, reason| !*flag && reason.is_none())
            .times(1)
            .returning(|_, _, _, _| Ok(true));

        GuestService::new(Arc::new(guests))
            .set_blacklisted(Uuid::now_v7(), Uuid::now_v7(), false, Some("viejo".into()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn database_failures_are_masked() {
        let mut guests = MockGuestRepository::new();
        guests
            .expect_get_all()
            .returning(|_, _| Err(HmsError::Database(sqlx::Error::PoolTimedOut)));

        let err = GuestService::new(Arc::new(guests))
            .get_all(Uuid::now_v7(), GuestQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Internal(ref m) if m == "Error al obtener los huéspedes"));
    }
}
