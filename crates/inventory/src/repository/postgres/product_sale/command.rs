use crate::{
    abstract_trait::product_sale::repository::ProductSaleCommandRepositoryTrait,
    model::product_sale::{ProductSale as ProductSaleModel, ProductSaleFields},
    repository::postgres::product_sale::SELECT_SALE,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

pub struct ProductSaleCommandRepository {
    db: ConnectionPool,
}

impl ProductSaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

async fn load_sale(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> Result<ProductSaleModel, RepositoryError> {
    let sql = format!("{SELECT_SALE} WHERE s.id = $1");

    sqlx::query_as::<_, ProductSaleModel>(&sql)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from)
}

#[async_trait]
impl ProductSaleCommandRepositoryTrait for ProductSaleCommandRepository {
    async fn create_sale(
        &self,
        fields: &ProductSaleFields,
    ) -> Result<ProductSaleModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let flipped = sqlx::query(
            r#"
            UPDATE products
            SET in_stock = FALSE,
                updated_at = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(fields.product_id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to mark product ID {} out of stock: {:?}",
                fields.product_id, err
            );
            RepositoryError::from(err)
        })?;

        if flipped.rows_affected() == 0 {
            error!("❌ Product ID {} not found for sale", fields.product_id);
            return Err(RepositoryError::NotFound);
        }

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO product_sales
                (document_name, product_id, quantity, purchase_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING id
            "#,
        )
        .bind(&fields.document_name)
        .bind(fields.product_id)
        .bind(fields.quantity)
        .bind(fields.purchase_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert sale {}: {:?}", fields.document_name, err);
            RepositoryError::from(err)
        })?;

        let sale = load_sale(&mut tx, id).await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created sale ID {} for product ID {}",
            sale.id, fields.product_id
        );
        Ok(sale)
    }

    async fn update_sale(
        &self,
        id: i64,
        fields: &ProductSaleFields,
    ) -> Result<ProductSaleModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let updated = sqlx::query(
            r#"
            UPDATE product_sales
            SET document_name = $2,
                product_id = $3,
                quantity = $4,
                purchase_price = $5,
                updated_at = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&fields.document_name)
        .bind(fields.product_id)
        .bind(fields.quantity)
        .bind(fields.purchase_price)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update sale ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        let sale = load_sale(&mut tx, id).await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated sale ID {id}");
        Ok(sale)
    }

    async fn delete_sale(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product_sales WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete sale ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted sale ID {id}");
        Ok(())
    }
}
