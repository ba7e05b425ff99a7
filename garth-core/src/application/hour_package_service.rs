use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::{HourPackage, RoomType};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::hour_packages::{
    CreateHourPackageRequest, HourPackageDto, HourPackageQuery, UpdateHourPackageRequest,
};
use crate::application::validation::{non_negative, required};
use crate::database::ports::hour_packages::HourPackageRepository;
use crate::database::ports::room_types::RoomTypeRepository;
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Paquete de horas no encontrado";

#[derive(Clone)]
pub struct HourPackageService {
    packages: Arc<dyn HourPackageRepository>,
    room_types: Arc<dyn RoomTypeRepository>,
}

impl fmt::Debug for HourPackageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HourPackageService")
            .field("packages_repo", &Arc::strong_count(&self.packages))
            .field("room_types_repo", &Arc::strong_count(&self.room_types))
            .finish()
    }
}

impl HourPackageService {
    pub fn new(
        packages: Arc<dyn HourPackageRepository>,
        room_types: Arc<dyn RoomTypeRepository>,
    ) -> Self {
        Self {
            packages,
            room_types,
        }
    }

    pub async fn create(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        request: CreateHourPackageRequest,
    ) -> Result<HourPackageDto> {
        let name = Self::check(&request)?;
        let room_type = self.hourly_room_type(hotel_id, request.room_type_id).await?;
        self.ensure_unique(hotel_id, request.room_type_id, request.hours, None)
            .await?;

        let now = Utc::now();
        let package = HourPackage {
            id: Uuid::now_v7(),
            hotel_id,
            room_type_id: request.room_type_id,
            name,
            hours: request.hours,
            price: request.price,
            extra_hour_price: request.extra_hour_price,
            is_active: true,
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
            room_type_name: Some(room_type.name),
        };

        self.packages
            .create(&package)
            .await
            .map_err(|e| e.or_internal("Error al crear el paquete de horas"))?;

        info!(%hotel_id, id = %package.id, hours = package.hours, "hour package created");
        Ok(package.into())
    }

    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        request: UpdateHourPackageRequest,
    ) -> Result<HourPackageDto> {
        let name = Self::check(&request)?;
        let mut package = self.find(hotel_id, id).await?;
        let room_type = self.hourly_room_type(hotel_id, request.room_type_id).await?;
        self.ensure_unique(hotel_id, request.room_type_id, request.hours, Some(id))
            .await?;

        package.room_type_id = request.room_type_id;
        package.room_type_name = Some(room_type.name);
        package.name = name;
        package.hours = request.hours;
        package.price = request.price;
        package.extra_hour_price = request.extra_hour_price;
        package.updated_at = Utc::now();

        let updated = self
            .packages
            .update(&package)
            .await
            .map_err(|e| e.or_internal("Error al actualizar el paquete de horas"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "hour package updated");
        Ok(package.into())
    }

    pub async fn delete(&self, hotel_id: Uuid, id: Uuid) -> Result<()> {
        let deleted = self
            .packages
            .soft_delete(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el paquete de horas"))?;
        if !deleted {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "hour package deactivated");
        Ok(())
    }

    pub async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<HourPackageDto> {
        Ok(self.find(hotel_id, id).await?.into())
    }

    pub async fn get_all(
        &self,
        hotel_id: Uuid,
        query: HourPackageQuery,
    ) -> Result<Vec<HourPackageDto>> {
        let packages = self
            .packages
            .get_all(hotel_id, query.room_type_id, query.include_inactive)
            .await
            .map_err(|e| e.or_internal("Error al obtener los paquetes de horas"))?;
        Ok(packages.into_iter().map(HourPackageDto::from).collect())
    }

    /// Active packages of one room type; the type must belong to the hotel.
    pub async fn get_by_room_type(
        &self,
        hotel_id: Uuid,
        room_type_id: Uuid,
    ) -> Result<Vec<HourPackageDto>> {
        self.room_types
            .get_by_id(hotel_id, room_type_id)
            .await
            .map_err(|e| e.or_internal("Error al obtener los paquetes de horas"))?
            .ok_or_else(|| HmsError::not_found("Tipo de habitación no encontrado"))?;

        self.get_all(
            hotel_id,
            HourPackageQuery {
                room_type_id: Some(room_type_id),
                include_inactive: false,
            },
        )
        .await
    }

    async fn find(&self, hotel_id: Uuid, id: Uuid) -> Result<HourPackage> {
        self.packages
            .get_by_id(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al obtener el paquete de horas"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))
    }

    fn check(request: &CreateHourPackageRequest) -> Result<String> {
        request.validate()?;
        let name = required(&request.name, "El nombre del paquete es requerido")?;

        if request.price <= Decimal::ZERO {
            return Err(HmsError::validation("El precio debe ser mayor a 0"));
        }
        non_negative(
            request.extra_hour_price,
            "El precio por hora extra no puede ser negativo",
        )?;
        Ok(name)
    }

    async fn hourly_room_type(&self, hotel_id: Uuid, room_type_id: Uuid) -> Result<RoomType> {
        let room_type = self
            .room_types
            .get_by_id(hotel_id, room_type_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el tipo de habitación"))?
            .filter(|rt| rt.is_active)
            .ok_or_else(|| HmsError::validation("El tipo de habitación seleccionado no existe"))?;

        if !room_type.allows_hourly {
            return Err(HmsError::validation(
                "El tipo de habitación no permite estancias por horas",
            ));
        }
        Ok(room_type)
    }

    async fn ensure_unique(
        &self,
        hotel_id: Uuid,
        room_type_id: Uuid,
        hours: i32,
        exclude_id: Option<Uuid>,
    ) -> Result<()> {
        let exists = self
            .packages
            .exists(hotel_id, room_type_id, hours, exclude_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el paquete de horas"))?;
        if exists {
            return Err(HmsError::conflict(format!(
                "Ya existe un paquete de {hours} horas para este tipo de habitación"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support;
    use crate::database::ports::hour_packages::MockHourPackageRepository;
    use crate::database::ports::room_types::MockRoomTypeRepository;

    fn request(room_type_id: Uuid, hours: i32) -> CreateHourPackageRequest {
        CreateHourPackageRequest {
            room_type_id,
            name: "Paquete".into(),
            hours,
            price: Decimal::new(35000, 2),
            extra_hour_price: Decimal::new(8000, 2),
        }
    }

    fn room_types_returning(room_type: RoomType) -> MockRoomTypeRepository {
        let mut room_types = MockRoomTypeRepository::new();
        room_types
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(room_type.clone())));
        room_types
    }

    #[tokio::test]
    async fn hours_must_be_within_a_day() {
        let svc = HourPackageService::new(
            Arc::new(MockHourPackageRepository::new()),
            Arc::new(MockRoomTypeRepository::new()),
        );

        for hours in [0, 25] {
            let err = svc
                .create(Uuid::now_v7(), Uuid::now_v7(), request(Uuid::now_v7(), hours))
                .await
                .unwrap_err();
            assert!(matches!(err, HmsError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn price_must_be_positive() {
        let svc = HourPackageService::new(
            Arc::new(MockHourPackageRepository::new()),
            Arc::new(MockRoomTypeRepository::new()),
        );

        let mut free = request(Uuid::now_v7(), 3);
        free.price = Decimal::ZERO;
        assert!(matches!(
            svc.create(Uuid::now_v7(), Uuid::now_v7(), free).await,
            Err(HmsError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn nightly_only_room_type_is_rejected() {
        let hotel_id = Uuid::now_v7();
        let mut room_type = test_support::room_type(hotel_id);
        room_type.allows_hourly = false;
        let room_type_id = room_type.id;

        let mut packages = MockHourPackageRepository::new();
        packages.expect_create().never();

        let room_types = Arc::new(room_types_returning(room_type));
        let err = HourPackageService::new(Arc::new(packages), room_types)
            .create(hotel_id, Uuid::now_v7(), request(room_type_id, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Validation(ref m) if m.contains("por horas")));
    }

    #[tokio::test]
    async fn duplicate_hours_for_the_type_is_a_conflict() {
        let hotel_id = Uuid::now_v7();
        let room_type = test_support::room_type(hotel_id);
        let room_type_id = room_type.id;

        let mut packages = MockHourPackageRepository::new();
        packages
            .expect_exists()
            .withf(move |_, rt, hours, ex| *rt == room_type_id && *hours == 3 && ex.is_none())
            .returning(|_, _, _, _| Ok(true));
        packages.expect_create().never();

        let room_types = Arc::new(room_types_returning(room_type));
        let err = HourPackageService::new(Arc::new(packages), room_types)
            .create(hotel_id, Uuid::now_v7(), request(room_type_id, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_then_list_by_room_type() {
        let hotel_id = Uuid::now_v7();
        let room_type = test_support::room_type(hotel_id);
        let room_type_id = room_type.id;
        let stored = test_support::hour_package(hotel_id, room_type_id);

        let mut packages = MockHourPackageRepository::new();
        packages.expect_exists().returning(|_, _, _, _| Ok(false));
        packages.expect_create().times(1).returning(|_| Ok(()));
        packages
            .expect_get_all()
            .withf(move |_, rt, inactive| *rt == Some(room_type_id) && !*inactive)
            .returning(move |_, _, _| Ok(vec![stored.clone()]));

        let room_types = Arc::new(room_types_returning(room_type));
        let svc = HourPackageService::new(Arc::new(packages), room_types);
        let created = svc
            .create(hotel_id, Uuid::now_v7(), request(room_type_id, 6))
            .await
            .unwrap();
        assert_eq!(created.hours, 6);
        assert_eq!(created.room_type_name.as_deref(), Some("Estándar"));

        let listed = svc.get_by_room_type(hotel_id, room_type_id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }
}
