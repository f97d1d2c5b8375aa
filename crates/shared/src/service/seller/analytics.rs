use crate::{
    abstract_trait::{
        seller::{
            repository::query::DynSellerQueryRepository,
            service::analytics::SellerAnalyticsServiceTrait,
        },
        transaction::repository::query::DynTransactionQueryRepository,
    },
    analytics::{
        Period, SellerTotal, compute_productive_interval, most_productive, rank_seller_totals,
    },
    domain::{
        requests::LowPerformanceQuery,
        responses::{ApiResponse, ProductiveIntervalResponse, SellerResponse},
    },
    errors::{AnalyticsError, ServiceError, validation_messages},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use tracing::{error, info, warn};
use validator::Validate;

pub struct SellerAnalyticsService {
    seller_query: DynSellerQueryRepository,
    transaction_query: DynTransactionQueryRepository,
}

impl SellerAnalyticsService {
    pub fn new(
        seller_query: DynSellerQueryRepository,
        transaction_query: DynTransactionQueryRepository,
    ) -> Self {
        Self {
            seller_query,
            transaction_query,
        }
    }

    async fn ranking_in(&self, period: &Period) -> Result<Vec<SellerTotal>, ServiceError> {
        let amounts = self
            .transaction_query
            .find_amounts_in_period(period)
            .await
            .map_err(|e| {
                error!("❌ Failed to load amounts for {period:?}: {e:?}");
                ServiceError::Repo(e)
            })?;

        Ok(rank_seller_totals(
            amounts.into_iter().map(|row| (row.seller_id, row.amount)),
        ))
    }

    async fn top_seller_in(&self, period: &Period) -> Result<SellerResponse, ServiceError> {
        let ranking = self.ranking_in(period).await?;

        let top = most_productive(&ranking).ok_or_else(|| {
            warn!("⚠️ No sales between {} and {}", period.start(), period.end());
            ServiceError::NotFound("No sales recorded in the requested period".to_string())
        })?;

        info!(
            "🏆 Top seller id={} total={}",
            top.seller_id, top.total_amount
        );

        let seller = self
            .seller_query
            .find_by_id(top.seller_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Seller not found with id: {}", top.seller_id))
            })?;

        Ok(SellerResponse::from(seller))
    }

    async fn ensure_seller(&self, seller_id: i64) -> Result<(), ServiceError> {
        if self.seller_query.exists(seller_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!(
                "Seller not found with id: {seller_id}"
            )))
        }
    }
}

#[async_trait]
impl SellerAnalyticsServiceTrait for SellerAnalyticsService {
    async fn most_productive_all_time(
        &self,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        info!("📊 Looking up the most productive seller of all time");

        let period = Period::all_time(Local::now().naive_local());
        let seller = self.top_seller_in(&period).await?;

        Ok(ApiResponse::success(
            "Most productive seller retrieved successfully",
            seller,
        ))
    }

    async fn most_productive_by_days(
        &self,
        days: i64,
    ) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        info!("📊 Looking up the most productive seller of the last {days} days");

        let period = Period::last_days(Local::now().naive_local(), days)?;
        let seller = self.top_seller_in(&period).await?;

        Ok(ApiResponse::success(
            format!("Most productive seller of the last {days} days retrieved successfully"),
            seller,
        ))
    }

    async fn low_performance(
        &self,
        req: &LowPerformanceQuery,
    ) -> Result<ApiResponse<Vec<SellerResponse>>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let period = Period::from_bounds(req.start_date, req.end_date)?;

        info!("📉 Looking up sellers below {}, period={period:?}", req.limit);

        let below: Vec<SellerResponse> = self
            .seller_query
            .find_with_total_less_than(req.limit, period.as_ref())
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch sellers below {}: {e:?}", req.limit);
                ServiceError::Repo(e)
            })?
            .into_iter()
            .map(SellerResponse::from)
            .collect();

        info!("✅ {} sellers below {}", below.len(), req.limit);

        Ok(ApiResponse::success(
            "Low performance sellers retrieved successfully",
            below,
        ))
    }

    async fn most_productive_time(
        &self,
        seller_id: i64,
        days: i64,
    ) -> Result<ApiResponse<ProductiveIntervalResponse>, ServiceError> {
        info!("📊 Searching best {days}-day window for seller id={seller_id}");

        if days < 1 {
            return Err(ServiceError::Analytics(AnalyticsError::InvalidArgument(
                format!("days must be positive, got {days}"),
            )));
        }

        self.ensure_seller(seller_id).await?;

        let transactions = self
            .transaction_query
            .find_by_seller(seller_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to load transactions of seller {seller_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        let interval = compute_productive_interval(&transactions, days).map_err(|e| match e {
            AnalyticsError::NoData => {
                warn!("⚠️ Seller {seller_id} has no transactions");
                ServiceError::NotFound(format!("Seller {seller_id} has no transactions"))
            }
            other => ServiceError::Analytics(other),
        })?;

        info!(
            "✅ Seller {seller_id} best window {} .. {}",
            interval.start, interval.end
        );

        Ok(ApiResponse::success(
            "Most productive period retrieved successfully",
            ProductiveIntervalResponse::new(seller_id, days, interval),
        ))
    }
}
