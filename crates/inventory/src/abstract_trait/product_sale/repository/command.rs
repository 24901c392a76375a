use crate::model::product_sale::{ProductSale as ProductSaleModel, ProductSaleFields};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductSaleCommandRepository =
    Arc<dyn ProductSaleCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductSaleCommandRepositoryTrait {
    /// Inserts the sale and marks the referenced product out of stock in one
    /// unit of work. `NotFound` when the product does not exist.
    async fn create_sale(
        &self,
        fields: &ProductSaleFields,
    ) -> Result<ProductSaleModel, RepositoryError>;
    async fn update_sale(
        &self,
        id: i64,
        fields: &ProductSaleFields,
    ) -> Result<ProductSaleModel, RepositoryError>;
    async fn delete_sale(&self, id: i64) -> Result<(), RepositoryError>;
}
