use garth_model::Hotel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Format used for check-in/check-out times on the wire.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSettingsDto {
    pub id: Uuid,
    pub name: String,
    pub legal_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub timezone: String,
    pub currency: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub tax_rate: Decimal,
    pub lodging_tax_rate: Decimal,
    pub max_hourly_stay_hours: i32,
    pub logo_url: Option<String>,
}

impl From<Hotel> for HotelSettingsDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            legal_name: hotel.legal_name,
            tax_id: hotel.tax_id,
            address: hotel.address,
            city: hotel.city,
            state: hotel.state,
            country: hotel.country,
            postal_code: hotel.postal_code,
            phone: hotel.phone,
            email: hotel.email,
            timezone: hotel.timezone,
            currency: hotel.currency,
            check_in_time: hotel.check_in_time.format(TIME_FORMAT).to_string(),
            check_out_time: hotel.check_out_time.format(TIME_FORMAT).to_string(),
            tax_rate: hotel.tax_rate,
            lodging_tax_rate: hotel.lodging_tax_rate,
            max_hourly_stay_hours: hotel.max_hourly_stay_hours,
            logo_url: hotel.logo_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateHotelSettingsRequest {
    #[validate(length(max = 200, message = "El nombre no puede exceder 200 caracteres"))]
    pub name: String,
    pub legal_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: Option<String>,
    pub timezone: String,
    pub currency: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub tax_rate: Decimal,
    pub lodging_tax_rate: Decimal,
    #[validate(range(
        min = 1,
        max = 24,
        message = "Las horas máximas por estancia deben estar entre 1 y 24"
    ))]
    pub max_hourly_stay_hours: i32,
    pub logo_url: Option<String>,
}
