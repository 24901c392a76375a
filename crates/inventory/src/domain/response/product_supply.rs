use crate::{
    domain::response::{ProductResponse, format_timestamp},
    model::product_supply::ProductSupply as ProductSupplyModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSupplyResponse {
    pub id: i64,
    pub document_name: String,
    pub product: ProductResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductSupplyModel> for ProductSupplyResponse {
    fn from(value: ProductSupplyModel) -> Self {
        ProductSupplyResponse {
            id: value.id,
            created_at: format_timestamp(&value.created_at),
            updated_at: format_timestamp(&value.updated_at),
            document_name: value.document_name,
            product: value.product.into(),
            quantity: value.quantity,
        }
    }
}
