use crate::{
    domain::requests::{CreateTransactionRequest, UpdateTransactionRequest},
    errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandRepository =
    Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
