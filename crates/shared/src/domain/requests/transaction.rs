use crate::{
    domain::requests::{not_in_future, positive_amount},
    model::transaction::PaymentType,
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct CreateTransactionRequest {
    #[validate(range(min = 1, message = "seller id is mandatory"))]
    pub seller_id: i64,

    #[validate(custom(function = "positive_amount", message = "amount must be greater than 0"))]
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,

    pub payment_type: PaymentType,

    /// Defaults to the time the request is handled.
    #[validate(custom(
        function = "not_in_future",
        message = "transaction date cannot be in the future"
    ))]
    #[serde(default)]
    pub transaction_date: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct UpdateTransactionRequest {
    #[validate(range(min = 1, message = "seller id is mandatory"))]
    pub seller_id: i64,

    #[validate(custom(function = "positive_amount", message = "amount must be greater than 0"))]
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,

    pub payment_type: PaymentType,
}
