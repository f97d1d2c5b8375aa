use crate::{
    domain::{
        requests::{CreateTransactionRequest, UpdateTransactionRequest},
        responses::{ApiResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandService = Arc<dyn TransactionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<ApiResponse<bool>, ServiceError>;
}
