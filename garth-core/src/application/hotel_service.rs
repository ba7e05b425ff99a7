use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::clean;
use crate::api_types::hotel::{HotelSettingsDto, UpdateHotelSettingsRequest};
use crate::application::validation::{currency_code, percent, required, time_of_day};
use crate::database::ports::hotels::HotelRepository;
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Hotel no encontrado";

#[derive(Clone)]
pub struct HotelService {
    hotels: Arc<dyn HotelRepository>,
}

impl fmt::Debug for HotelService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotelService")
            .field("hotels_repo", &Arc::strong_count(&self.hotels))
            .finish()
    }
}

impl HotelService {
    pub fn new(hotels: Arc<dyn HotelRepository>) -> Self {
        Self { hotels }
    }

    pub async fn get_settings(&self, hotel_id: Uuid) -> Result<HotelSettingsDto> {
        let hotel = self
            .hotels
            .get_by_id(hotel_id)
            .await
            .map_err(|e| e.or_internal("Error al obtener la configuración del hotel"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))?;
        Ok(hotel.into())
    }

    pub async fn update_settings(
        &self,
        hotel_id: Uuid,
        mut request: UpdateHotelSettingsRequest,
    ) -> Result<HotelSettingsDto> {
        request.email = clean(request.email);
        request.validate()?;

        let name = required(&request.name, "El nombre del hotel es requerido")?;
        let timezone = required(&request.timezone, "La zona horaria es requerida")?;
        let currency = currency_code(&request.currency)?;
        let tax_rate = percent(
            request.tax_rate,
            "La tasa de impuesto debe estar entre 0 y 100",
        )?;
        let lodging_tax_rate = percent(
            request.lodging_tax_rate,
            "La tasa de impuesto de hospedaje debe estar entre 0 y 100",
        )?;
        let check_in_time = time_of_day(
            &request.check_in_time,
            "La hora de entrada debe tener el formato HH:MM",
        )?;
        let check_out_time = time_of_day(
            &request.check_out_time,
            "La hora de salida debe tener el formato HH:MM",
        )?;

        let mut hotel = self
            .hotels
            .get_by_id(hotel_id)
            .await
            .map_err(|e| e.or_internal("Error al actualizar la configuración del hotel"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))?;

        hotel.name = name;
        hotel.legal_name = clean(request.legal_name);
        hotel.tax_id = clean(request.tax_id);
        hotel.address = clean(request.address);
        hotel.city = clean(request.city);
        hotel.state = clean(request.state);
        hotel.country = clean(request.country);
        hotel.postal_code = clean(request.postal_code);
        hotel.phone = clean(request.phone);
        hotel.email = request.email;
        hotel.timezone = timezone;
        hotel.currency = currency;
        hotel.check_in_time = check_in_time;
        hotel.check_out_time = check_out_time;
        hotel.tax_rate = tax_rate;
        hotel.lodging_tax_rate = lodging_tax_rate;
        hotel.max_hourly_stay_hours = request.max_hourly_stay_hours;
        hotel.logo_url = clean(request.logo_url);
        hotel.updated_at = Utc::now();

        let updated = self
            .hotels
            .update_settings(&hotel)
            .await
            .map_err(|e| e.or_internal("Error al actualizar la configuración del hotel"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, "hotel settings updated");
        Ok(hotel.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support;
    use crate::database::ports::hotels::MockHotelRepository;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn request() -> UpdateHotelSettingsRequest {
        UpdateHotelSettingsRequest {
            name: "Hotel Garth Centro".into(),
            legal_name: None,
            tax_id: None,
            address: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
            phone: None,
            email: Some(String::new()),
            timezone: "America/Mexico_City".into(),
            currency: "mxn".into(),
            check_in_time: "14:30".into(),
            check_out_time: "11:00".into(),
            tax_rate: Decimal::new(16, 0),
            lodging_tax_rate: Decimal::new(3, 0),
            max_hourly_stay_hours: 6,
            logo_url: None,
        }
    }

    #[tokio::test]
    async fn settings_are_normalized_and_saved() {
        let hotel_id = Uuid::now_v7();
        let hotel = test_support::hotel(hotel_id);

        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_get_by_id()
            .returning(move |_| Ok(Some(hotel.clone())));
        hotels
            .expect_update_settings()
            .withf(|h| {
                h.currency == "MXN"
                    && h.email.is_none()
                    && h.check_in_time == NaiveTime::from_hms_opt(14, 30, 0).unwrap()
            })
            .times(1)
            .returning(|_| Ok(true));

        let dto = HotelService::new(Arc::new(hotels))
            .update_settings(hotel_id, request())
            .await
            .unwrap();
        assert_eq!(dto.check_in_time, "14:30");
        assert_eq!(dto.max_hourly_stay_hours, 6);
    }

    #[tokio::test]
    async fn out_of_range_values_are_rejected() {
        let svc = HotelService::new(Arc::new(MockHotelRepository::new()));

        let mut tax = request();
        tax.tax_rate = Decimal::new(101, 0);
        assert!(matches!(
            svc.update_settings(Uuid::now_v7(), tax).await,
            Err(HmsError::Validation(_))
        ));

        let mut hours = request();
        hours.max_hourly_stay_hours = 25;
        assert!(matches!(
            svc.update_settings(Uuid::now_v7(), hours).await,
            Err(HmsError::Validation(_))
        ));

        let mut time = request();
        time.check_out_time = "11".into();
        assert!(matches!(
            svc.update_settings(Uuid::now_v7(), time).await,
            Err(HmsError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn missing_hotel_is_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_get_by_id().returning(|_| Ok(None));

        let err = HotelService::new(Arc::new(hotels))
            .get_settings(Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::NotFound(_)));
    }
}
