use crate::domain::{
    requests::{CreateProductSupplyRequest, UpdateProductSupplyRequest},
    response::ProductSupplyResponse,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductSupplyCommandService = Arc<dyn ProductSupplyCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductSupplyCommandServiceTrait {
    async fn add_product_supply(
        &self,
        req: &CreateProductSupplyRequest,
    ) -> Result<ApiResponse<ProductSupplyResponse>, ServiceError>;
    async fn update_product_supply(
        &self,
        req: &UpdateProductSupplyRequest,
    ) -> Result<ApiResponse<ProductSupplyResponse>, ServiceError>;
    async fn delete_product_supply(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
