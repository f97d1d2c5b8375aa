use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    analytics::Period,
    config::ConnectionPool,
    errors::RepositoryError,
    model::transaction::{SellerAmountModel, TransactionModel},
};
use async_trait::async_trait;
use tracing::error;

const SELECT_WITH_SELLER: &str = r#"
    SELECT t.id, t.seller_id, s.name AS seller_name, t.amount, t.payment_type, t.transaction_date
    FROM transactions t
    JOIN sellers s ON s.id = t.seller_id
"#;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
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
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("{SELECT_WITH_SELLER} ORDER BY t.transaction_date, t.id");

        sqlx::query_as::<_, TransactionModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all transactions: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("{SELECT_WITH_SELLER} WHERE t.id = $1");

        sqlx::query_as::<_, TransactionModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error fetching transaction {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_seller(
        &self,
        seller_id: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "{SELECT_WITH_SELLER} WHERE t.seller_id = $1 ORDER BY t.transaction_date, t.id"
        );

        sqlx::query_as::<_, TransactionModel>(&sql)
            .bind(seller_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error fetching transactions of seller {seller_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_seller_in_period(
        &self,
        seller_id: i64,
        period: &Period,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "{SELECT_WITH_SELLER} WHERE t.seller_id = $1 AND t.transaction_date BETWEEN $2 AND $3 \
             ORDER BY t.transaction_date, t.id"
        );

        sqlx::query_as::<_, TransactionModel>(&sql)
            .bind(seller_id)
            .bind(period.start())
            .bind(period.end())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Database error fetching transactions of seller {seller_id} in period: {e:?}"
                );
                RepositoryError::from(e)
            })
    }

    async fn find_amounts_in_period(
        &self,
        period: &Period,
    ) -> Result<Vec<SellerAmountModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, SellerAmountModel>(
            r#"
            SELECT seller_id, amount
            FROM transactions
            WHERE transaction_date BETWEEN $1 AND $2
            "#,
        )
        .bind(period.start())
        .bind(period.end())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_amounts_in_period: {e:?}");
            RepositoryError::from(e)
        })
    }
}
