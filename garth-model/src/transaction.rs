use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Result, text_enum};

text_enum! {
    pub enum TransactionKind ("transaction kind") {
        Charge => "charge",
        Payment => "payment",
        Refund => "refund",
        Adjustment => "adjustment",
    }
}

text_enum! {
    pub enum PaymentMethod ("payment method") {
        Cash => "cash",
        Card => "card",
        Transfer => "transfer",
        Other => "other",
    }
}

/// A money movement recorded against a stay during a cashier shift.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub stay_id: Option<Uuid>,
    pub cash_cut_id: Option<Uuid>,
    pub kind: String,
    pub payment_method: Option<String>,
    pub amount: Decimal,
    pub concept: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

impl Transaction {
    pub fn kind(&self) -> Result<TransactionKind> {
        self.kind.parse()
    }

    pub fn payment_method(&self) -> Option<Result<PaymentMethod>> {
        self.payment_method.as_deref().map(str::parse)
    }
}
