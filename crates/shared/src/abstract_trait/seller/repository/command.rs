use crate::{
    domain::requests::{CreateSellerRequest, UpdateSellerRequest},
    errors::RepositoryError,
    model::seller::SellerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSellerCommandRepository = Arc<dyn SellerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SellerCommandRepositoryTrait {
    async fn create(&self, req: &CreateSellerRequest) -> Result<SellerModel, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<SellerModel, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
