use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::{Product as ProductModel, ProductFields},
    repository::postgres::product::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, fields: &ProductFields) -> Result<ProductModel, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO products (name, description, price, in_stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.in_stock)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", fields.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i64,
        fields: &ProductFields,
    ) -> Result<ProductModel, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                in_stock = $5,
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.in_stock)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", result.id);
        Ok(result)
    }

    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product ID {id}");
        Ok(())
    }
}
