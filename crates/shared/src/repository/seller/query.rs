use crate::{
    abstract_trait::seller::repository::query::SellerQueryRepositoryTrait,
    analytics::Period, config::ConnectionPool, errors::RepositoryError,
    model::seller::SellerModel,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::error;

pub struct SellerQueryRepository {
    db: ConnectionPool,
}

impl SellerQueryRepository {
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
impl SellerQueryRepositoryTrait for SellerQueryRepository {
    async fn find_all(&self) -> Result<Vec<SellerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sellers = sqlx::query_as::<_, SellerModel>(
            r#"
            SELECT id, name, contact_info, registration_date
            FROM sellers
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_all sellers: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(sellers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SellerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let seller = sqlx::query_as::<_, SellerModel>(
            r#"
            SELECT id, name, contact_info, registration_date
            FROM sellers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error fetching seller {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(seller)
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (SELECT 1 FROM sellers WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error checking seller {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(exists)
    }

    async fn find_with_total_less_than(
        &self,
        limit: Decimal,
        period: Option<&Period>,
    ) -> Result<Vec<SellerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // The period filter sits in the join so sellers without sales keep a zero total.
        let sellers = match period {
            Some(period) => {
                sqlx::query_as::<_, SellerModel>(
                    r#"
                    SELECT s.id, s.name, s.contact_info, s.registration_date
                    FROM sellers s
                    LEFT JOIN transactions t
                      ON t.seller_id = s.id
                     AND t.transaction_date BETWEEN $2 AND $3
                    GROUP BY s.id
                    HAVING COALESCE(SUM(t.amount), 0) < $1
                    ORDER BY s.id
                    "#,
                )
                .bind(limit)
                .bind(period.start())
                .bind(period.end())
                .fetch_all(&mut *conn)
                .await
            }
            None => {
                sqlx::query_as::<_, SellerModel>(
                    r#"
                    SELECT s.id, s.name, s.contact_info, s.registration_date
                    FROM sellers s
                    LEFT JOIN transactions t ON t.seller_id = s.id
                    GROUP BY s.id
                    HAVING COALESCE(SUM(t.amount), 0) < $1
                    ORDER BY s.id
                    "#,
                )
                .bind(limit)
                .fetch_all(&mut *conn)
                .await
            }
        }
        .map_err(|e| {
            error!("❌ Database error in find_with_total_less_than {limit}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(sellers)
    }
}
