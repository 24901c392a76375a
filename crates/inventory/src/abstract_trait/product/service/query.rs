use crate::domain::{requests::SearchProductsRequest, response::ProductResponse};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn get_all_products(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn get_product_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn search_products(
        &self,
        req: &SearchProductsRequest,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
}
