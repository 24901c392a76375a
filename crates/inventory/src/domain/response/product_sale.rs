use crate::{
    domain::response::{ProductResponse, format_timestamp},
    model::product_sale::ProductSale as ProductSaleModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSaleResponse {
    pub id: i64,
    pub document_name: String,
    pub product: ProductResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductSaleModel> for ProductSaleResponse {
    fn from(value: ProductSaleModel) -> Self {
        ProductSaleResponse {
            id: value.id,
            created_at: format_timestamp(&value.created_at),
            updated_at: format_timestamp(&value.updated_at),
            document_name: value.document_name,
            product: value.product.into(),
            quantity: value.quantity,
            purchase_price: value.purchase_price,
        }
    }
}
