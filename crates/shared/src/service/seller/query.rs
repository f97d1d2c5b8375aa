use crate::{
    abstract_trait::seller::{
        repository::query::DynSellerQueryRepository, service::query::SellerQueryServiceTrait,
    },
    domain::responses::{ApiResponse, SellerResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct SellerQueryService {
    query: DynSellerQueryRepository,
}

impl SellerQueryService {
    pub fn new(query: DynSellerQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl SellerQueryServiceTrait for SellerQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<SellerResponse>>, ServiceError> {
        info!("🔍 Fetching all sellers");

        let sellers = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch sellers: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} sellers", sellers.len());

        Ok(ApiResponse::success(
            "Sellers retrieved successfully",
            sellers.into_iter().map(SellerResponse::from).collect(),
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        info!("🔍 Fetching seller id={id}");

        let seller = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch seller {id}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Seller not found with id: {id}")))?;

        Ok(ApiResponse::success(
            "Seller retrieved successfully",
            SellerResponse::from(seller),
        ))
    }
}
