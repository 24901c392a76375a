use crate::model::product::Product;
use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A sale joined with the product it references.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductSale {
    #[sqlx(rename = "sale_id")]
    pub id: i64,
    pub document_name: String,
    pub quantity: Option<i32>,
    pub purchase_price: Option<f64>,
    #[sqlx(rename = "sale_created_at")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "sale_updated_at")]
    pub updated_at: NaiveDateTime,
    #[sqlx(flatten)]
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSaleFields {
    pub document_name: String,
    pub product_id: i64,
    pub quantity: Option<i32>,
    pub purchase_price: Option<f64>,
}

impl From<&ProductSale> for ProductSaleFields {
    fn from(sale: &ProductSale) -> Self {
        Self {
            document_name: sale.document_name.clone(),
            product_id: sale.product.id,
            quantity: sale.quantity,
            purchase_price: sale.purchase_price,
        }
    }
}
