use crate::model::product::Product;
use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A supply joined with the product it references.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductSupply {
    #[sqlx(rename = "supply_id")]
    pub id: i64,
    pub document_name: String,
    pub quantity: Option<i32>,
    #[sqlx(rename = "supply_created_at")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "supply_updated_at")]
    pub updated_at: NaiveDateTime,
    #[sqlx(flatten)]
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSupplyFields {
    pub document_name: String,
    pub product_id: i64,
    pub quantity: Option<i32>,
}

impl From<&ProductSupply> for ProductSupplyFields {
    fn from(supply: &ProductSupply) -> Self {
        Self {
            document_name: supply.document_name.clone(),
            product_id: supply.product.id,
            quantity: supply.quantity,
        }
    }
}
