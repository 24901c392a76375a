use crate::model::product::{Product as ProductModel, ProductFields};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, fields: &ProductFields) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: i64,
        fields: &ProductFields,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError>;
}
