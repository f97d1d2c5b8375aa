use crate::{
    domain::{
        requests::PeriodQuery,
        responses::{ApiResponse, SalesStatisticsResponse, SellerTotalAmountResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionStatsService = Arc<dyn TransactionStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionStatsServiceTrait {
    async fn total_amount(
        &self,
        seller_id: i64,
        req: &PeriodQuery,
    ) -> Result<ApiResponse<SellerTotalAmountResponse>, ServiceError>;
    async fn sales_statistics(
        &self,
        req: &PeriodQuery,
    ) -> Result<ApiResponse<SalesStatisticsResponse>, ServiceError>;
}
