use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::{Room, RoomStatus};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::clean;
use crate::api_types::rooms::{
    CreateRoomRequest, RoomDto, RoomFormOptions, RoomQuery, UpdateRoomRequest,
};
use crate::application::validation::required;
use crate::database::ports::room_types::RoomTypeRepository;
use crate::database::ports::rooms::{RoomFilter, RoomRepository};
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Habitación no encontrada";

#[derive(Clone)]
pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
    room_types: Arc<dyn RoomTypeRepository>,
}

impl fmt::Debug for RoomService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomService")
            .field("rooms_repo", &Arc::strong_count(&self.rooms))
            .field("room_types_repo", &Arc::strong_count(&self.room_types))
            .finish()
    }
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomRepository>, room_types: Arc<dyn RoomTypeRepository>) -> Self {
        Self { rooms, room_types }
    }

    pub async fn create(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        request: CreateRoomRequest,
    ) -> Result<RoomDto> {
        request.validate()?;
        let room_number = required(&request.room_number, "El número de habitación es requerido")?;
        let room_type_name = self.ensure_room_type(hotel_id, request.room_type_id).await?;
        self.ensure_unique_number(hotel_id, &room_number, None).await?;

        let now = Utc::now();
        let room = Room {
            id: Uuid::now_v7(),
            hotel_id,
            room_type_id: request.room_type_id,
            room_number,
            floor: request.floor,
            status: RoomStatus::Available.as_str().to_string(),
            notes: clean(request.notes),
            is_active: true,
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
            room_type_name: Some(room_type_name),
        };

        self.rooms
            .create(&room)
            .await
            .map_err(|e| e.or_internal("Error al crear la habitación"))?;

        info!(%hotel_id, id = %room.id, number = %room.room_number, "room created");
        Ok(room.into())
    }

    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        request: UpdateRoomRequest,
    ) -> Result<RoomDto> {
        request.validate()?;
        let room_number = required(&request.room_number, "El número de habitación es requerido")?;
        let mut room = self.find(hotel_id, id).await?;
        let room_type_name = self.ensure_room_type(hotel_id, request.room_type_id).await?;
        self.ensure_unique_number(hotel_id, &room_number, Some(id))
            .await?;

        room.room_type_id = request.room_type_id;
        room.room_type_name = Some(room_type_name);
        room.room_number = room_number;
        room.floor = request.floor;
        room.notes = clean(request.notes);
        room.updated_at = Utc::now();

        let updated = self
            .rooms
            .update(&room)
            .await
            .map_err(|e| e.or_internal("Error al actualizar la habitación"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "room updated");
        Ok(room.into())
    }

    /// Soft delete, refused while the room is occupied.
    pub async fn delete(&self, hotel_id: Uuid, id: Uuid) -> Result<()> {
        let room = self.find(hotel_id, id).await?;
        if Self::status_of(&room)? == RoomStatus::Occupied {
            return Err(HmsError::conflict(
                "No se puede eliminar una habitación ocupada",
            ));
        }

        let deleted = self
            .rooms
            .soft_delete(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar la habitación"))?;
        if !deleted {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "room deactivated");
        Ok(())
    }

    pub async fn change_status(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        status: RoomStatus,
    ) -> Result<RoomDto> {
        let mut room = self.find(hotel_id, id).await?;
        let current = Self::status_of(&room)?;

        if current == RoomStatus::Occupied
            && matches!(status, RoomStatus::Blocked | RoomStatus::Maintenance)
        {
            return Err(HmsError::conflict(
                "No se puede bloquear ni enviar a mantenimiento una habitación ocupada",
            ));
        }

        let updated = self
            .rooms
            .update_status(hotel_id, id, status)
            .await
            .map_err(|e| e.or_internal("Error al cambiar el estado de la habitación"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, from = %current, to = %status, "room status changed");
        room.status = status.as_str().to_string();
        room.updated_at = Utc::now();
        Ok(room.into())
    }

    pub async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<RoomDto> {
        Ok(self.find(hotel_id, id).await?.into())
    }

    pub async fn get_all(&self, hotel_id: Uuid, query: RoomQuery) -> Result<Vec<RoomDto>> {
        let filter = RoomFilter {
            status: query.status,
            room_type_id: query.room_type_id,
            floor: query.floor,
            include_inactive: query.include_inactive,
        };

        let rooms = self
            .rooms
            .get_all(hotel_id, &filter)
            .await
            .map_err(|e| e.or_internal("Error al obtener las habitaciones"))?;
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    pub async fn form_options(&self, hotel_id: Uuid) -> Result<RoomFormOptions> {
        let room_types = self
            .room_types
            .get_all(hotel_id, false)
            .await
            .map_err(|e| e.or_internal("Error al obtener los tipos de habitación"))?;

        Ok(RoomFormOptions {
            room_types: room_types
                .into_iter()
                .map(|rt| crate::api_types::LookupItem {
                    id: rt.id,
                    name: rt.name,
                })
                .collect(),
            statuses: RoomStatus::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        })
    }

    async fn find(&self, hotel_id: Uuid, id: Uuid) -> Result<Room> {
        self.rooms
            .get_by_id(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al obtener la habitación"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))
    }

    fn status_of(room: &Room) -> Result<RoomStatus> {
        room.status().map_err(|err| {
            HmsError::Internal(err.to_string()).or_internal("Estado de habitación inválido")
        })
    }

    /// The room type must be active in the same hotel. Returns its name.
    async fn ensure_room_type(&self, hotel_id: Uuid, room_type_id: Uuid) -> Result<String> {
        let room_type = self
            .room_types
            .get_by_id(hotel_id, room_type_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el tipo de habitación"))?
            .filter(|rt| rt.is_active)
            .ok_or_else(|| HmsError::validation("El tipo de habitación seleccionado no existe"))?;
        Ok(room_type.name)
    }

    async fn ensure_unique_number(
        &self,
        hotel_id: Uuid,
        room_number: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<()> {
        let exists = self
            .rooms
            .exists_by_number(hotel_id, room_number, exclude_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el número de habitación"))?;
        if exists {
            return Err(HmsError::conflict(format!(
                "Ya existe una habitación con el número {room_number}"
            )));
        }
        Ok(())
    }
}
