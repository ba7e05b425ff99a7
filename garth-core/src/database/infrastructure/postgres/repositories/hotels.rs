use async_trait::async_trait;
use garth_model::Hotel;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::hotels::HotelRepository;
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresHotelRepository {
    pool: PgPool,
}

impl PostgresHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PostgresHotelRepository {
    async fn get_by_id(&self, hotel_id: Uuid) -> Result<Option<Hotel>> {
        let hotel = ProcedureCall::new("hotel_get_by_id")
            .arg("p_id", hotel_id)
            .fetch_optional::<Hotel>(&self.pool)
            .await?;
        Ok(hotel)
    }

    async fn update_settings(&self, hotel: &Hotel) -> Result<bool> {
        let updated = ProcedureCall::new("hotel_update_settings")
            .arg("p_id", hotel.id)
            .arg("p_name", hotel.name.clone())
            .arg("p_legal_name", hotel.legal_name.clone())
            .arg("p_tax_id", hotel.tax_id.clone())
            .arg("p_address", hotel.address.clone())
            .arg("p_city", hotel.city.clone())
            .arg("p_state", hotel.state.clone())
            .arg("p_country", hotel.country.clone())
            .arg("p_postal_code", hotel.postal_code.clone())
            .arg("p_phone", hotel.phone.clone())
            .arg("p_email", hotel.email.clone())
            .arg("p_timezone", hotel.timezone.clone())
            .arg("p_currency", hotel.currency.clone())
            .arg("p_check_in_time", hotel.check_in_time)
            .arg("p_check_out_time", hotel.check_out_time)
            .arg("p_tax_rate", hotel.tax_rate)
            .arg("p_lodging_tax_rate", hotel.lodging_tax_rate)
            .arg("p_max_hourly_stay_hours", hotel.max_hourly_stay_hours)
            .arg("p_logo_url", hotel.logo_url.clone())
            .fetch_scalar::<bool>(&self.pool)
            .await?;
        Ok(updated)
    }
}
