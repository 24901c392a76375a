use crate::model::product_sale::ProductSale as ProductSaleModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductSaleQueryRepository = Arc<dyn ProductSaleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductSaleQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductSaleModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSaleModel>, RepositoryError>;
}
