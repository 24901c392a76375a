mod product;
mod product_sale;
mod product_supply;

pub use self::product::{
    CreateProductRequest, DEFAULT_PAGE_SIZE, DeleteProductRequest, PageRequest, ProductFilter,
    ProductSearch, ProductSort, SearchProductsRequest, SortDirection, SortField,
    UpdateProductRequest,
};
pub use self::product_sale::{CreateProductSaleRequest, UpdateProductSaleRequest};
pub use self::product_supply::{CreateProductSupplyRequest, UpdateProductSupplyRequest};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// `{"id": N}` reference to an existing product inside sale and supply payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductReference {
    #[validate(required(message = "Product id is mandatory"))]
    #[schema(example = 1)]
    pub id: Option<i64>,
}
