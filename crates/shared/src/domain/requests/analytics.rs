use crate::domain::requests::non_negative_amount;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

/// Optional inclusive bounds; both or neither must be supplied.
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LowPerformanceQuery {
    #[validate(custom(function = "non_negative_amount", message = "limit must not be negative"))]
    #[param(value_type = String, example = "1000.00")]
    pub limit: Decimal,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
}
