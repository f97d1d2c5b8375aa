use crate::{analytics::Period, errors::RepositoryError, model::seller::SellerModel};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynSellerQueryRepository = Arc<dyn SellerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SellerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<SellerModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<SellerModel>, RepositoryError>;
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;
    /// Sellers whose total in `period` (all time when `None`) is strictly
    /// below `limit`, ordered by id. Sellers with no sales count as zero.
    async fn find_with_total_less_than(
        &self,
        limit: Decimal,
        period: Option<&Period>,
    ) -> Result<Vec<SellerModel>, RepositoryError>;
}
