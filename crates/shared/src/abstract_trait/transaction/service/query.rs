use crate::{
    domain::{
        requests::PeriodQuery,
        responses::{ApiResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64)
    -> Result<ApiResponse<TransactionResponse>, ServiceError>;
    async fn find_by_seller(
        &self,
        seller_id: i64,
        req: &PeriodQuery,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError>;
}
