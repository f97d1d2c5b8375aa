use crate::{analytics::Period, errors::RepositoryError};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynTransactionStatsRepository = Arc<dyn TransactionStatsRepositoryTrait + Send + Sync>;

/// Sums computed by the store. A seller without transactions totals zero.
#[async_trait]
pub trait TransactionStatsRepositoryTrait {
    async fn total_amount_by_seller(&self, seller_id: i64) -> Result<Decimal, RepositoryError>;
    async fn total_amount_by_seller_in_period(
        &self,
        seller_id: i64,
        period: &Period,
    ) -> Result<Decimal, RepositoryError>;
}
