use crate::analytics::{ProductiveInterval, SellerTotal};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductiveIntervalResponse {
    pub seller_id: i64,
    pub days: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ProductiveIntervalResponse {
    pub fn new(seller_id: i64, days: i64, interval: ProductiveInterval) -> Self {
        Self {
            seller_id,
            days,
            start_date: interval.start,
            end_date: interval.end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerTotalAmountResponse {
    pub seller_id: i64,
    #[schema(value_type = String, example = "300.00")]
    pub total_amount: Decimal,
}

impl From<SellerTotal> for SellerTotalAmountResponse {
    fn from(total: SellerTotal) -> Self {
        Self {
            seller_id: total.seller_id,
            total_amount: total.total_amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesStatisticsResponse {
    #[schema(value_type = String, example = "1250.00")]
    pub total_sales: Decimal,
    /// Sellers with at least one sale in the period.
    pub seller_count: usize,
    pub ranking: Vec<SellerTotalAmountResponse>,
}
