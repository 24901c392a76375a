use crate::{
    abstract_trait::product_supply::repository::ProductSupplyQueryRepositoryTrait,
    model::product_supply::ProductSupply as ProductSupplyModel,
    repository::postgres::product_supply::SELECT_SUPPLY,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct ProductSupplyQueryRepository {
    db: ConnectionPool,
}

impl ProductSupplyQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductSupplyQueryRepositoryTrait for ProductSupplyQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductSupplyModel>, RepositoryError> {
        let sql = format!("{SELECT_SUPPLY} ORDER BY s.id");

        sqlx::query_as::<_, ProductSupplyModel>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product supplies: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSupplyModel>, RepositoryError> {
        let sql = format!("{SELECT_SUPPLY} WHERE s.id = $1");

        sqlx::query_as::<_, ProductSupplyModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product supply ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }
}
