use chrono::{DateTime, Utc};
use garth_model::HourPackage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHourPackageRequest {
    pub room_type_id: Uuid,
    #[validate(length(max = 100, message = "El nombre no puede exceder 100 caracteres"))]
    pub name: String,
    #[validate(range(min = 1, max = 24, message = "Las horas deben estar entre 1 y 24"))]
    pub hours: i32,
    pub price: Decimal,
    #[serde(default)]
    pub extra_hour_price: Decimal,
}

pub type UpdateHourPackageRequest = CreateHourPackageRequest;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourPackageQuery {
    pub room_type_id: Option<Uuid>,
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourPackageDto {
    pub id: Uuid,
    pub room_type_id: Uuid,
    pub room_type_name: Option<String>,
    pub name: String,
    pub hours: i32,
    pub price: Decimal,
    pub extra_hour_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<HourPackage> for HourPackageDto {
    fn from(package: HourPackage) -> Self {
        Self {
            id: package.id,
            room_type_id: package.room_type_id,
            room_type_name: package.room_type_name,
            name: package.name,
            hours: package.hours,
            price: package.price,
            extra_hour_price: package.extra_hour_price,
            is_active: package.is_active,
            created_at: package.created_at,
        }
    }
}
