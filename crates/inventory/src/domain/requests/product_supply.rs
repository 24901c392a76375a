use crate::domain::requests::ProductReference;
use serde::{Deserialize, Serialize};
use shared::utils::validate_not_blank;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductSupplyRequest {
    #[validate(
        required(message = "Document name is mandatory"),
        length(max = 255, message = "Document name must be less than 255 characters"),
        custom(function = "validate_not_blank", message = "Document name is mandatory")
    )]
    #[schema(example = "WAYBILL-77")]
    pub document_name: Option<String>,

    #[validate(required(message = "Product is mandatory"), nested)]
    pub product: Option<ProductReference>,

    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    #[schema(example = 10)]
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductSupplyRequest {
    #[validate(required(message = "Product supply id is mandatory"))]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[validate(
        length(max = 255, message = "Document name must be less than 255 characters"),
        custom(function = "validate_not_blank", message = "Document name must not be blank")
    )]
    pub document_name: Option<String>,

    #[validate(nested)]
    pub product: Option<ProductReference>,

    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_name_must_not_be_blank() {
        let req = CreateProductSupplyRequest {
            document_name: Some(" ".into()),
            product: Some(ProductReference { id: Some(1) }),
            quantity: None,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.errors().contains_key("document_name"));
    }

    #[test]
    fn quantity_is_optional() {
        let req = CreateProductSupplyRequest {
            document_name: Some("W-1".into()),
            product: Some(ProductReference { id: Some(1) }),
            quantity: None,
        };
        assert!(req.validate().is_ok());
    }
}
