use crate::{
    abstract_trait::{
        seller::repository::query::DynSellerQueryRepository,
        transaction::{
            repository::command::DynTransactionCommandRepository,
            service::command::TransactionCommandServiceTrait,
        },
    },
    domain::{
        requests::{CreateTransactionRequest, UpdateTransactionRequest},
        responses::{ApiResponse, TransactionResponse},
    },
    errors::{RepositoryError, ServiceError, validation_messages},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct TransactionCommandService {
    command: DynTransactionCommandRepository,
    seller_query: DynSellerQueryRepository,
}

impl TransactionCommandService {
    pub fn new(
        command: DynTransactionCommandRepository,
        seller_query: DynSellerQueryRepository,
    ) -> Self {
        Self {
            command,
            seller_query,
        }
    }

    async fn ensure_seller(&self, seller_id: i64) -> Result<(), ServiceError> {
        let exists = self.seller_query.exists(seller_id).await.map_err(|e| {
            error!("❌ Failed to check seller {seller_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if !exists {
            error!("❌ Seller {seller_id} does not exist");
            return Err(ServiceError::NotFound(format!(
                "Seller not found with id: {seller_id}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        info!(
            "🏗️ Recording {} {} sale for seller {}",
            req.amount, req.payment_type, req.seller_id
        );

        self.ensure_seller(req.seller_id).await?;

        let transaction = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create transaction: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Transaction created id={}", transaction.id);

        Ok(ApiResponse::success(
            "Transaction created successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        info!("🔄 Updating transaction id={id}");

        self.ensure_seller(req.seller_id).await?;

        let transaction = self.command.update(id, req).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Transaction not found with id: {id}"))
            }
            other => {
                error!("❌ Failed to update transaction {id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        Ok(ApiResponse::success(
            "Transaction updated successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn delete(&self, id: i64) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Deleting transaction id={id}");

        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Transaction not found with id: {id}"))
            }
            other => {
                error!("❌ Failed to delete transaction {id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        Ok(ApiResponse::success("Transaction deleted successfully", true))
    }
}
