use crate::domain::response::ProductSupplyResponse;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductSupplyQueryService = Arc<dyn ProductSupplyQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductSupplyQueryServiceTrait {
    async fn get_all_product_supplies(
        &self,
    ) -> Result<ApiResponse<Vec<ProductSupplyResponse>>, ServiceError>;
    async fn get_product_supply_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductSupplyResponse>, ServiceError>;
}
