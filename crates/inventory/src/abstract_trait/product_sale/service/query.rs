use crate::domain::response::ProductSaleResponse;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductSaleQueryService = Arc<dyn ProductSaleQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductSaleQueryServiceTrait {
    async fn get_all_product_sales(
        &self,
    ) -> Result<ApiResponse<Vec<ProductSaleResponse>>, ServiceError>;
    async fn get_product_sale_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductSaleResponse>, ServiceError>;
}
