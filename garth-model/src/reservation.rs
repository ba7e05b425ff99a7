use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Result, text_enum};

text_enum! {
    pub enum ReservationStatus ("reservation status") {
        Pending => "pending",
        Confirmed => "confirmed",
        CheckedIn => "checked_in",
        Cancelled => "cancelled",
        NoShow => "no_show",
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_id: Uuid,
    pub room_type_id: Uuid,
    pub room_id: Option<Uuid>,
    pub folio: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub status: String,
    pub total_amount: Decimal,
    pub deposit_amount: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl Reservation {
    pub fn status(&self) -> Result<ReservationStatus> {
        self.status.parse()
    }

    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days().max(0)
    }
}
