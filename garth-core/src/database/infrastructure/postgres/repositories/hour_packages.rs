use async_trait::async_trait;
use garth_model::HourPackage;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::hour_packages::HourPackageRepository;
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresHourPackageRepository {
    pool: PgPool,
}

impl PostgresHourPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl HourPackageRepository for PostgresHourPackageRepository {
    async fn create(&self, package: &HourPackage) -> Result<()> {
        ProcedureCall::new("hour_package_create")
            .arg("p_id", package.id)
            .arg("p_hotel_id", package.hotel_id)
            .arg("p_room_type_id", package.room_type_id)
            .arg("p_name", package.name.clone())
            .arg("p_hours", package.hours)
            .arg("p_price", package.price)
            .arg("p_extra_hour_price", package.extra_hour_price)
            .arg("p_created_by", package.created_by)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn update(&self, package: &HourPackage) -> Result<bool> {
        let updated = ProcedureCall::new("hour_package_update")
            .arg("p_id", package.id)
            .arg("p_hotel_id", package.hotel_id)
            .arg("p_room_type_id", package.room_type_id)
            .arg("p_name", package.name.clone())
            .arg("p_hours", package.hours)
            .arg("p_price", package.price)
            .arg("p_extra_hour_price", package.extra_hour_price)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool> {
        let deleted = ProcedureCall::new("hour_package_soft_delete")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<HourPackage>> {
        let package = ProcedureCall::new("hour_package_get_by_id")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_optional::<HourPackage>(self.pool())
            .await?;
        Ok(package)
    }

    async fn get_all(
        &self,
        hotel_id: Uuid,
        room_type_id: Option<Uuid>,
        include_inactive: bool,
    ) -> Result<Vec<HourPackage>> {
        let packages = ProcedureCall::new("hour_package_get_all")
            .arg("p_hotel_id", hotel_id)
            .arg("p_room_type_id", room_type_id)
            .arg("p_include_inactive", include_inactive)
            .fetch_all::<HourPackage>(self.pool())
            .await?;
        Ok(packages)
    }

    async fn exists(
        &self,
        hotel_id: Uuid,
        room_type_id: Uuid,
        hours: i32,
        exclude_id: Option<Uuid>,
    ) -> Result<bool> {
        let exists = ProcedureCall::new("hour_package_exists")
            .arg("p_hotel_id", hotel_id)
            .arg("p_room_type_id", room_type_id)
            .arg("p_hours", hours)
            .arg("p_exclude_id", exclude_id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(exists)
    }
}
