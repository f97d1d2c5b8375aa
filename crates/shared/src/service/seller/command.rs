use crate::{
    abstract_trait::seller::{
        repository::command::DynSellerCommandRepository,
        service::command::SellerCommandServiceTrait,
    },
    domain::{
        requests::{CreateSellerRequest, UpdateSellerRequest},
        responses::{ApiResponse, SellerResponse},
    },
    errors::{RepositoryError, ServiceError, validation_messages},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct SellerCommandService {
    command: DynSellerCommandRepository,
}

impl SellerCommandService {
    pub fn new(command: DynSellerCommandRepository) -> Self {
        Self { command }
    }
}

fn not_found_or_repo(id: i64) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |e| match e {
        RepositoryError::NotFound => {
            ServiceError::NotFound(format!("Seller not found with id: {id}"))
        }
        other => {
            error!("❌ Seller {id} write failed: {other:?}");
            ServiceError::Repo(other)
        }
    }
}

#[async_trait]
impl SellerCommandServiceTrait for SellerCommandService {
    async fn create(
        &self,
        req: &CreateSellerRequest,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        info!("🏗️ Creating seller name={}", req.name);

        let seller = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create seller: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Seller created id={}", seller.id);

        Ok(ApiResponse::success(
            "Seller created successfully",
            SellerResponse::from(seller),
        ))
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        info!("🔄 Updating seller id={id}");

        let seller = self
            .command
            .update(id, req)
            .await
            .map_err(not_found_or_repo(id))?;

        Ok(ApiResponse::success(
            "Seller updated successfully",
            SellerResponse::from(seller),
        ))
    }

    async fn delete(&self, id: i64) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Deleting seller id={id}");

        self.command
            .delete(id)
            .await
            .map_err(not_found_or_repo(id))?;

        info!("✅ Seller {id} deleted");

        Ok(ApiResponse::success("Seller deleted successfully", true))
    }
}
