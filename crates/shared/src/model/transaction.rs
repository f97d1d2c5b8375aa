use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Card,
    Cash,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Card => write!(f, "CARD"),
            PaymentType::Cash => write!(f, "CASH"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CARD" => Ok(PaymentType::Card),
            "CASH" => Ok(PaymentType::Cash),
            other => Err(format!("unknown payment type '{other}'")),
        }
    }
}

/// A stored sale with its seller's name loaded alongside.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub seller_id: i64,
    pub seller_name: String,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub transaction_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellerAmountModel {
    pub seller_id: i64,
    pub amount: Decimal,
}
