use crate::{
    domain::{
        requests::LowPerformanceQuery,
        responses::{ApiResponse, ProductiveIntervalResponse, SellerResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSellerAnalyticsService = Arc<dyn SellerAnalyticsServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerAnalyticsServiceTrait {
    async fn most_productive_all_time(&self)
    -> Result<ApiResponse<SellerResponse>, ServiceError>;
    async fn most_productive_by_days(
        &self,
        days: i64,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError>;
    async fn low_performance(
        &self,
        req: &LowPerformanceQuery,
    ) -> Result<ApiResponse<Vec<SellerResponse>>, ServiceError>;
    async fn most_productive_time(
        &self,
        seller_id: i64,
        days: i64,
    ) -> Result<ApiResponse<ProductiveIntervalResponse>, ServiceError>;
}
