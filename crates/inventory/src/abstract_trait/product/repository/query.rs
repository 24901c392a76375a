use crate::{domain::requests::ProductSearch, model::product::Product as ProductModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError>;
    /// Returns the requested page (or every match when unpaged) and the
    /// total number of matching products.
    async fn search(
        &self,
        search: &ProductSearch,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
}
