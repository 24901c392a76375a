use crate::model::product_supply::{ProductSupply as ProductSupplyModel, ProductSupplyFields};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductSupplyCommandRepository =
    Arc<dyn ProductSupplyCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductSupplyCommandRepositoryTrait {
    async fn create_supply(
        &self,
        fields: &ProductSupplyFields,
    ) -> Result<ProductSupplyModel, RepositoryError>;
    async fn update_supply(
        &self,
        id: i64,
        fields: &ProductSupplyFields,
    ) -> Result<ProductSupplyModel, RepositoryError>;
    async fn delete_supply(&self, id: i64) -> Result<(), RepositoryError>;
}
