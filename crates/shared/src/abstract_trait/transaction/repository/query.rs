use crate::{
    analytics::Period,
    errors::RepositoryError,
    model::transaction::{SellerAmountModel, TransactionModel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<TransactionModel>, RepositoryError>;
    async fn find_by_seller(&self, seller_id: i64)
    -> Result<Vec<TransactionModel>, RepositoryError>;
    async fn find_by_seller_in_period(
        &self,
        seller_id: i64,
        period: &Period,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
    /// One row per transaction in the period, reduced to seller and amount.
    async fn find_amounts_in_period(
        &self,
        period: &Period,
    ) -> Result<Vec<SellerAmountModel>, RepositoryError>;
}
