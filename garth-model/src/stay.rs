use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Result, text_enum};

text_enum! {
    /// Whether the stay is billed by hour package or by night.
    pub enum StayKind ("stay kind") {
        Hourly => "hourly",
        Nightly => "nightly",
    }
}

text_enum! {
    pub enum StayStatus ("stay status") {
        Active => "active",
        CheckedOut => "checked_out",
        Cancelled => "cancelled",
    }
}

/// An actual occupancy of a room, with or without a prior reservation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Stay {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_id: Uuid,
    pub guest_id: Option<Uuid>,
    pub reservation_id: Option<Uuid>,
    pub hour_package_id: Option<Uuid>,
    pub kind: String,
    pub status: String,
    pub check_in_at: DateTime<Utc>,
    pub expected_check_out_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl Stay {
    pub fn kind(&self) -> Result<StayKind> {
        self.kind.parse()
    }

    pub fn status(&self) -> Result<StayStatus> {
        self.status.parse()
    }
}
