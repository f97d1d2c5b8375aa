use crate::{
    abstract_trait::{
        seller::repository::query::DynSellerQueryRepository,
        transaction::{
            repository::{
                query::DynTransactionQueryRepository, stats::DynTransactionStatsRepository,
            },
            service::stats::TransactionStatsServiceTrait,
        },
    },
    analytics::{Period, rank_seller_totals},
    domain::{
        requests::PeriodQuery,
        responses::{ApiResponse, SalesStatisticsResponse, SellerTotalAmountResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use rust_decimal::Decimal;
use tracing::{error, info};

pub struct TransactionStatsService {
    query: DynTransactionQueryRepository,
    stats: DynTransactionStatsRepository,
    seller_query: DynSellerQueryRepository,
}

impl TransactionStatsService {
    pub fn new(
        query: DynTransactionQueryRepository,
        stats: DynTransactionStatsRepository,
        seller_query: DynSellerQueryRepository,
    ) -> Self {
        Self {
            query,
            stats,
            seller_query,
        }
    }
}

#[async_trait]
impl TransactionStatsServiceTrait for TransactionStatsService {
    async fn total_amount(
        &self,
        seller_id: i64,
        req: &PeriodQuery,
    ) -> Result<ApiResponse<SellerTotalAmountResponse>, ServiceError> {
        let period = Period::from_bounds(req.start_date, req.end_date)?;

        info!("📊 Summing sales of seller {seller_id}, period={period:?}");

        if !self.seller_query.exists(seller_id).await? {
            return Err(ServiceError::NotFound(format!(
                "Seller not found with id: {seller_id}"
            )));
        }

        let total_amount = match &period {
            Some(period) => {
                self.stats
                    .total_amount_by_seller_in_period(seller_id, period)
                    .await
            }
            None => self.stats.total_amount_by_seller(seller_id).await,
        }
        .map_err(|e| {
            error!("❌ Failed to sum sales of seller {seller_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Seller {seller_id} total={total_amount}");

        Ok(ApiResponse::success(
            "Total amount retrieved successfully",
            SellerTotalAmountResponse {
                seller_id,
                total_amount,
            },
        ))
    }

    async fn sales_statistics(
        &self,
        req: &PeriodQuery,
    ) -> Result<ApiResponse<SalesStatisticsResponse>, ServiceError> {
        let period = Period::from_bounds(req.start_date, req.end_date)?
            .unwrap_or_else(|| Period::all_time(Local::now().naive_local()));

        info!(
            "📊 Building sales statistics between {} and {}",
            period.start(),
            period.end()
        );

        let amounts = self
            .query
            .find_amounts_in_period(&period)
            .await
            .map_err(|e| {
                error!("❌ Failed to load amounts: {e:?}");
                ServiceError::Repo(e)
            })?;

        let ranking =
            rank_seller_totals(amounts.into_iter().map(|row| (row.seller_id, row.amount)));
        let total_sales: Decimal = ranking.iter().map(|total| total.total_amount).sum();

        Ok(ApiResponse::success(
            "Sales statistics retrieved successfully",
            SalesStatisticsResponse {
                total_sales,
                seller_count: ranking.len(),
                ranking: ranking
                    .into_iter()
                    .map(SellerTotalAmountResponse::from)
                    .collect(),
            },
        ))
    }
}
