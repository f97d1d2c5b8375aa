use crate::{
    abstract_trait::transaction::repository::stats::TransactionStatsRepositoryTrait,
    analytics::Period,
    config::ConnectionPool,
    errors::RepositoryError,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::error;

pub struct TransactionStatsRepository {
    db: ConnectionPool,
}

impl TransactionStatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionStatsRepositoryTrait for TransactionStatsRepository {
    async fn total_amount_by_seller(&self, seller_id: i64) -> Result<Decimal, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT COALESCE(SUM(amount), 0)::numeric AS total_amount
            FROM transactions
            WHERE seller_id = $1
        "#;

        sqlx::query_scalar::<_, Decimal>(sql)
            .bind(seller_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in total_amount_by_seller {seller_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn total_amount_by_seller_in_period(
        &self,
        seller_id: i64,
        period: &Period,
    ) -> Result<Decimal, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT COALESCE(SUM(amount), 0)::numeric AS total_amount
            FROM transactions
            WHERE seller_id = $1
              AND transaction_date BETWEEN $2 AND $3
        "#;

        sqlx::query_scalar::<_, Decimal>(sql)
            .bind(seller_id)
            .bind(period.start())
            .bind(period.end())
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Database error in total_amount_by_seller_in_period {seller_id}: {e:?}"
                );
                RepositoryError::from(e)
            })
    }
}
