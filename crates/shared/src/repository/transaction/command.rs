use crate::{
    abstract_trait::transaction::repository::command::TransactionCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateTransactionRequest, UpdateTransactionRequest},
    errors::RepositoryError,
    model::transaction::TransactionModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
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
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let transaction = sqlx::query_as::<_, TransactionModel>(
            r#"
            WITH inserted AS (
                INSERT INTO transactions (seller_id, amount, payment_type, transaction_date)
                VALUES ($1, $2, $3, COALESCE($4, LOCALTIMESTAMP))
                RETURNING id, seller_id, amount, payment_type, transaction_date
            )
            SELECT i.id, i.seller_id, s.name AS seller_name, i.amount, i.payment_type, i.transaction_date
            FROM inserted i
            JOIN sellers s ON s.id = i.seller_id
            "#,
        )
        .bind(req.seller_id)
        .bind(req.amount)
        .bind(req.payment_type)
        .bind(req.transaction_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create transaction for seller {}: {err:?}",
                req.seller_id
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Transaction {} recorded for seller {}",
            transaction.id, transaction.seller_id
        );

        Ok(transaction)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let transaction = sqlx::query_as::<_, TransactionModel>(
            r#"
            WITH updated AS (
                UPDATE transactions
                SET seller_id = $2, amount = $3, payment_type = $4
                WHERE id = $1
                RETURNING id, seller_id, amount, payment_type, transaction_date
            )
            SELECT u.id, u.seller_id, s.name AS seller_name, u.amount, u.payment_type, u.transaction_date
            FROM updated u
            JOIN sellers s ON s.id = u.seller_id
            "#,
        )
        .bind(id)
        .bind(req.seller_id)
        .bind(req.amount)
        .bind(req.payment_type)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update transaction {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(transaction)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete transaction {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
