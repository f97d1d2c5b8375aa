use crate::{
    domain::{
        requests::{CreateSellerRequest, UpdateSellerRequest},
        responses::{ApiResponse, SellerResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSellerCommandService = Arc<dyn SellerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateSellerRequest,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<ApiResponse<bool>, ServiceError>;
}
