use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::RoomType;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::room_types::{CreateRoomTypeRequest, RoomTypeDto, UpdateRoomTypeRequest};
use crate::api_types::{LookupItem, clean};
use crate::application::validation::{non_negative, required};
use crate::database::ports::room_types::RoomTypeRepository;
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Tipo de habitación no encontrado";

#[derive(Clone)]
pub struct RoomTypeService {
    room_types: Arc<dyn RoomTypeRepository>,
}

impl fmt::Debug for RoomTypeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomTypeService")
            .field("room_types_repo", &Arc::strong_count(&self.room_types))
            .finish()
    }
}

impl RoomTypeService {
    pub fn new(room_types: Arc<dyn RoomTypeRepository>) -> Self {
        Self { room_types }
    }

    pub async fn create(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        request: CreateRoomTypeRequest,
    ) -> Result<RoomTypeDto> {
        let (code, name) = Self::check(&request)?;
        self.ensure_unique_code(hotel_id, &code, None).await?;

        let now = Utc::now();
        let mut room_type = RoomType {
            id: Uuid::now_v7(),
            hotel_id,
            code,
            name,
            description: clean(request.description),
            base_capacity: request.base_capacity,
            max_capacity: request.max_capacity,
            base_price_night: request.base_price_night,
            extra_person_price: request.extra_person_price,
            allows_hourly: request.allows_hourly,
            allows_nightly: request.allows_nightly,
            sort_order: request.sort_order,
            amenities: None,
            photo_urls: None,
            is_active: true,
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
        };
        room_type.set_amenities(request.amenities);
        room_type.set_photo_urls(request.photo_urls);

        self.room_types
            .create(&room_type)
            .await
            .map_err(|e| e.or_internal("Error al crear el tipo de habitación"))?;

        info!(%hotel_id, id = %room_type.id, code = %room_type.code, "room type created");
        Ok(room_type.into())
    }

    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        request: UpdateRoomTypeRequest,
    ) -> Result<RoomTypeDto> {
        let (code, name) = Self::check(&request)?;
        let mut room_type = self.find(hotel_id, id).await?;
        self.ensure_unique_code(hotel_id, &code, Some(id)).await?;

        room_type.code = code;
        room_type.name = name;
        room_type.description = clean(request.description);
        room_type.base_capacity = request.base_capacity;
        room_type.max_capacity = request.max_capacity;
        room_type.base_price_night = request.base_price_night;
        room_type.extra_person_price = request.extra_person_price;
        room_type.allows_hourly = request.allows_hourly;
        room_type.allows_nightly = request.allows_nightly;
        room_type.sort_order = request.sort_order;
        room_type.set_amenities(request.amenities);
        room_type.set_photo_urls(request.photo_urls);
        room_type.updated_at = Utc::now();

        let updated = self
            .room_types
            .update(&room_type)
            .await
            .map_err(|e| e.or_internal("Error al actualizar el tipo de habitación"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "room type updated");
        Ok(room_type.into())
    }

    /// Soft delete, refused while active rooms still use the type.
    pub async fn delete(&self, hotel_id: Uuid, id: Uuid) -> Result<()> {
        self.find(hotel_id, id).await?;

        let rooms = self
            .room_types
            .count_active_rooms(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el tipo de habitación"))?;
        if rooms > 0 {
            return Err(HmsError::conflict(format!(
                "No se puede eliminar el tipo de habitación porque tiene {rooms} \
                 habitación(es) activa(s)"
            )));
        }

        let deleted = self
            .room_types
            .soft_delete(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el tipo de habitación"))?;
        if !deleted {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "room type deactivated");
        Ok(())
    }

    pub async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<RoomTypeDto> {
        Ok(self.find(hotel_id, id).await?.into())
    }

    pub async fn get_all(
        &self,
        hotel_id: Uuid,
        include_inactive: bool,
    ) -> Result<Vec<RoomTypeDto>> {
        let room_types = self
            .room_types
            .get_all(hotel_id, include_inactive)
            .await
            .map_err(|e| e.or_internal("Error al obtener los tipos de habitación"))?;
        Ok(room_types.into_iter().map(RoomTypeDto::from).collect())
    }

    /// Active room types for form selects.
    pub async fn lookup(&self, hotel_id: Uuid) -> Result<Vec<LookupItem>> {
        let room_types = self
            .room_types
            .get_all(hotel_id, false)
            .await
            .map_err(|e| e.or_internal("Error al obtener los tipos de habitación"))?;
        Ok(room_types
            .into_iter()
            .map(|rt| LookupItem {
                id: rt.id,
                name: rt.name,
            })
            .collect())
    }

    async fn find(&self, hotel_id: Uuid, id: Uuid) -> Result<RoomType> {
        self.room_types
            .get_by_id(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al obtener el tipo de habitación"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))
    }

    fn check(request: &CreateRoomTypeRequest) -> Result<(String, String)> {
        request.validate()?;

        let code = required(&request.code, "El código es requerido")?.to_uppercase();
        let name = required(&request.name, "El nombre es requerido")?;

        if request.max_capacity < request.base_capacity {
            return Err(HmsError::validation(
                "La capacidad máxima debe ser mayor o igual a la capacidad base",
            ));
        }
        non_negative(
            request.base_price_night,
            "El precio por noche no puede ser negativo",
        )?;
        non_negative(
            request.extra_person_price,
            "El precio por persona extra no puede ser negativo",
        )?;
        if !request.allows_hourly && !request.allows_nightly {
            return Err(HmsError::validation(
                "El tipo de habitación debe permitir estancias por horas o por noche",
            ));
        }

        Ok((code, name))
    }

    async fn ensure_unique_code(
        &self,
        hotel_id: Uuid,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<()> {
        let exists = self
            .room_types
            .exists_by_code(hotel_id, code, exclude_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el código del tipo de habitación"))?;
        if exists {
            return Err(HmsError::conflict(format!(
                "Ya existe un tipo de habitación con el código {code}"
            )));
        }
        Ok(())
    }
}
