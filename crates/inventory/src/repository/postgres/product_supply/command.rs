use crate::{
    abstract_trait::product_supply::repository::ProductSupplyCommandRepositoryTrait,
    model::product_supply::{ProductSupply as ProductSupplyModel, ProductSupplyFields},
    repository::postgres::product_supply::SELECT_SUPPLY,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

pub struct ProductSupplyCommandRepository {
    db: ConnectionPool,
}

impl ProductSupplyCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

async fn load_supply(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> Result<ProductSupplyModel, RepositoryError> {
    let sql = format!("{SELECT_SUPPLY} WHERE s.id = $1");

    sqlx::query_as::<_, ProductSupplyModel>(&sql)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from)
}

#[async_trait]
impl ProductSupplyCommandRepositoryTrait for ProductSupplyCommandRepository {
    async fn create_supply(
        &self,
        fields: &ProductSupplyFields,
    ) -> Result<ProductSupplyModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let flipped = sqlx::query(
            r#"
            UPDATE products
            SET in_stock = TRUE,
                updated_at = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(fields.product_id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to mark product ID {} in stock: {:?}",
                fields.product_id, err
            );
            RepositoryError::from(err)
        })?;

        if flipped.rows_affected() == 0 {
            error!("❌ Product ID {} not found for supply", fields.product_id);
            return Err(RepositoryError::NotFound);
        }

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO product_supplies
                (document_name, product_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING id
            "#,
        )
        .bind(&fields.document_name)
        .bind(fields.product_id)
        .bind(fields.quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert supply {}: {:?}", fields.document_name, err);
            RepositoryError::from(err)
        })?;

        let supply = load_supply(&mut tx, id).await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created supply ID {} for product ID {}",
            supply.id, fields.product_id
        );
        Ok(supply)
    }

    async fn update_supply(
        &self,
        id: i64,
        fields: &ProductSupplyFields,
    ) -> Result<ProductSupplyModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let updated = sqlx::query(
            r#"
            UPDATE product_supplies
            SET document_name = $2,
                product_id = $3,
                quantity = $4,
                updated_at = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&fields.document_name)
        .bind(fields.product_id)
        .bind(fields.quantity)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update supply ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        let supply = load_supply(&mut tx, id).await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated supply ID {id}");
        Ok(supply)
    }

    async fn delete_supply(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product_supplies WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete supply ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted supply ID {id}");
        Ok(())
    }
}
