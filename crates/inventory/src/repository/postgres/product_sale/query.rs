use crate::{
    abstract_trait::product_sale::repository::ProductSaleQueryRepositoryTrait,
    model::product_sale::ProductSale as ProductSaleModel,
    repository::postgres::product_sale::SELECT_SALE,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct ProductSaleQueryRepository {
    db: ConnectionPool,
}

impl ProductSaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductSaleQueryRepositoryTrait for ProductSaleQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductSaleModel>, RepositoryError> {
        let sql = format!("{SELECT_SALE} ORDER BY s.id");

        sqlx::query_as::<_, ProductSaleModel>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product sales: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSaleModel>, RepositoryError> {
        let sql = format!("{SELECT_SALE} WHERE s.id = $1");

        sqlx::query_as::<_, ProductSaleModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product sale ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }
}
