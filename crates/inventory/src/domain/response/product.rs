use crate::{domain::response::format_timestamp, model::product::Product as ProductModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub in_stock: bool,
    #[schema(example = "2026-01-01T10:00:00.000")]
    pub created_at: String,
    #[schema(example = "2026-01-01T10:00:00.000")]
    pub updated_at: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            created_at: format_timestamp(&value.created_at),
            updated_at: format_timestamp(&value.updated_at),
            name: value.name,
            description: value.description,
            price: value.price,
            in_stock: value.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serializes_in_camel_case() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 5)
            .unwrap();
        let model = ProductModel {
            id: 7,
            name: "Lamp".into(),
            description: String::new(),
            price: 12.5,
            in_stock: true,
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(ProductResponse::from(model)).unwrap();

        assert_eq!(json["inStock"], true);
        assert_eq!(json["createdAt"], "2026-01-01T10:00:00.005");
        assert!(json.get("in_stock").is_none());
    }
}
