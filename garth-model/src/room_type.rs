use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::json_list;

/// A sellable category of rooms with its nightly pricing.
///
/// `amenities` and `photo_urls` are JSON arrays kept in text columns; use the
/// accessors to read them as lists.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoomType {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub base_capacity: i32,
    pub max_capacity: i32,
    pub base_price_night: Decimal,
    pub extra_person_price: Decimal,
    pub allows_hourly: bool,
    pub allows_nightly: bool,
    pub sort_order: i32,
    pub amenities: Option<String>,
    pub photo_urls: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl RoomType {
    pub fn amenities(&self) -> Vec<String> {
        json_list::decode(self.amenities.as_deref())
    }

    pub fn photo_urls(&self) -> Vec<String> {
        json_list::decode(self.photo_urls.as_deref())
    }

    pub fn set_amenities<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.amenities = Some(json_list::encode(items));
    }

    pub fn set_photo_urls<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.photo_urls = Some(json_list::encode(items));
    }
}
