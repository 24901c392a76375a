use crate::model::product_supply::ProductSupply as ProductSupplyModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductSupplyQueryRepository =
    Arc<dyn ProductSupplyQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductSupplyQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductSupplyModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSupplyModel>, RepositoryError>;
}
