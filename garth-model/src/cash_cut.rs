use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// End-of-shift cash reconciliation for one cashier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CashCut {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub user_id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub opening_amount: Decimal,
    pub expected_amount: Decimal,
    pub counted_amount: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CashCut {
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }

    /// Counted minus expected; `None` while the shift is still open.
    pub fn difference(&self) -> Option<Decimal> {
        self.counted_amount
            .map(|counted| counted - self.expected_amount)
    }
}
