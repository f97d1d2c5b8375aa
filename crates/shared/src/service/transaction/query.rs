use crate::{
    abstract_trait::{
        seller::repository::query::DynSellerQueryRepository,
        transaction::{
            repository::query::DynTransactionQueryRepository,
            service::query::TransactionQueryServiceTrait,
        },
    },
    analytics::Period,
    domain::{
        requests::PeriodQuery,
        responses::{ApiResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransactionQueryService {
    query: DynTransactionQueryRepository,
    seller_query: DynSellerQueryRepository,
}

impl TransactionQueryService {
    pub fn new(
        query: DynTransactionQueryRepository,
        seller_query: DynSellerQueryRepository,
    ) -> Self {
        Self {
            query,
            seller_query,
        }
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError> {
        info!("🔍 Fetching all transactions");

        let transactions = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch all transactions: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} transactions", transactions.len());

        Ok(ApiResponse::success(
            "Transactions retrieved successfully",
            transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
        ))
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        info!("🔍 Fetching transaction id={id}");

        let transaction = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch transaction {id}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Transaction not found with id: {id}"))
            })?;

        Ok(ApiResponse::success(
            "Transaction retrieved successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn find_by_seller(
        &self,
        seller_id: i64,
        req: &PeriodQuery,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError> {
        let period = Period::from_bounds(req.start_date, req.end_date)?;

        if !self.seller_query.exists(seller_id).await? {
            return Err(ServiceError::NotFound(format!(
                "Seller not found with id: {seller_id}"
            )));
        }

        let transactions = match &period {
            Some(period) => {
                info!(
                    "💳 Fetching transactions of seller {seller_id} between {} and {}",
                    period.start(),
                    period.end()
                );
                self.query.find_by_seller_in_period(seller_id, period).await
            }
            None => {
                info!("💳 Fetching transactions of seller {seller_id}");
                self.query.find_by_seller(seller_id).await
            }
        }
        .map_err(|e| {
            error!("❌ Failed to fetch transactions of seller {seller_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!(
            "✅ Found {} transactions for seller {seller_id}",
            transactions.len()
        );

        Ok(ApiResponse::success(
            "Seller transactions retrieved successfully",
            transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
        ))
    }
}
