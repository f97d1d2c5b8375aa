use crate::model::transaction::{PaymentType, TransactionModel};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i64,
    pub seller_id: i64,
    pub seller_name: String,
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub transaction_date: NaiveDateTime,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.id,
            seller_id: model.seller_id,
            seller_name: model.seller_name,
            amount: model.amount,
            payment_type: model.payment_type,
            transaction_date: model.transaction_date,
        }
    }
}
