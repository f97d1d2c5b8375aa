use crate::{
    abstract_trait::seller::repository::command::SellerCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateSellerRequest, UpdateSellerRequest},
    errors::RepositoryError,
    model::seller::SellerModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct SellerCommandRepository {
    db: ConnectionPool,
}

impl SellerCommandRepository {
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
impl SellerCommandRepositoryTrait for SellerCommandRepository {
    async fn create(&self, req: &CreateSellerRequest) -> Result<SellerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let seller = sqlx::query_as::<_, SellerModel>(
            r#"
            INSERT INTO sellers (name, contact_info, registration_date)
            VALUES ($1, $2, LOCALTIMESTAMP)
            RETURNING id, name, contact_info, registration_date
            "#,
        )
        .bind(req.name.trim())
        .bind(req.contact_info.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create seller '{}': {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!("✅ Seller created with id {}", seller.id);

        Ok(seller)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<SellerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let seller = sqlx::query_as::<_, SellerModel>(
            r#"
            UPDATE sellers
            SET name = $2, contact_info = $3
            WHERE id = $1
            RETURNING id, name, contact_info, registration_date
            "#,
        )
        .bind(id)
        .bind(req.name.trim())
        .bind(req.contact_info.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update seller {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(seller)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM sellers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete seller {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
