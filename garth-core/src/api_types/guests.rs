use chrono::{DateTime, NaiveDate, Utc};
use garth_model::Guest;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[validate(length(max = 100, message = "El nombre no puede exceder 100 caracteres"))]
    pub first_name: String,
    #[validate(length(max = 100, message = "Los apellidos no pueden exceder 100 caracteres"))]
    pub last_name: String,
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
}

pub type UpdateGuestRequest = CreateGuestRequest;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlacklistRequest {
    pub is_blacklisted: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub is_vip: bool,
    pub is_blacklisted: bool,
    pub blacklist_reason: Option<String>,
    pub total_stays: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestDto {
    fn from(guest: Guest) -> Self {
        Self {
            full_name: guest.full_name(),
            id: guest.id,
            first_name: guest.first_name,
            last_name: guest.last_name,
            email: guest.email,
            phone: guest.phone,
            document_type: guest.document_type,
            document_number: guest.document_number,
            nationality: guest.nationality,
            birth_date: guest.birth_date,
            address: guest.address,
            notes: guest.notes,
            is_vip: guest.is_vip,
            is_blacklisted: guest.is_blacklisted,
            blacklist_reason: guest.blacklist_reason,
            total_stays: guest.total_stays,
            is_active: guest.is_active,
            created_at: guest.created_at,
        }
    }
}
