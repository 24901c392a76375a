use crate::domain::{
    requests::{CreateProductSaleRequest, UpdateProductSaleRequest},
    response::ProductSaleResponse,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductSaleCommandService = Arc<dyn ProductSaleCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductSaleCommandServiceTrait {
    async fn add_product_sale(
        &self,
        req: &CreateProductSaleRequest,
    ) -> Result<ApiResponse<ProductSaleResponse>, ServiceError>;
    async fn update_product_sale(
        &self,
        req: &UpdateProductSaleRequest,
    ) -> Result<ApiResponse<ProductSaleResponse>, ServiceError>;
    async fn delete_product_sale(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
