use crate::domain::requests::ProductReference;
use serde::{Deserialize, Serialize};
use shared::utils::{validate_finite, validate_not_blank};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductSaleRequest {
    #[validate(
        required(message = "Document name is mandatory"),
        length(max = 255, message = "Document name must be less than 255 characters"),
        custom(function = "validate_not_blank", message = "Document name is mandatory")
    )]
    #[schema(example = "INV-2024-001")]
    pub document_name: Option<String>,

    #[validate(required(message = "Product is mandatory"), nested)]
    pub product: Option<ProductReference>,

    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    #[schema(example = 3)]
    pub quantity: Option<i32>,

    #[validate(
        range(min = 0.0, message = "Purchase price must be greater than or equal to 0"),
        custom(function = "validate_finite", message = "Purchase price must be a finite number")
    )]
    #[schema(example = 250.0)]
    pub purchase_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductSaleRequest {
    #[validate(required(message = "Product sale id is mandatory"))]
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

    #[validate(
        range(min = 0.0, message = "Purchase price must be greater than or equal to 0"),
        custom(function = "validate_finite", message = "Purchase price must be a finite number")
    )]
    pub purchase_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateProductSaleRequest {
        CreateProductSaleRequest {
            document_name: Some("INV-1".into()),
            product: Some(ProductReference { id: Some(1) }),
            quantity: Some(2),
            purchase_price: Some(10.0),
        }
    }

    #[test]
    fn accepts_a_complete_sale() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn product_reference_is_mandatory_and_needs_an_id() {
        let missing = CreateProductSaleRequest {
            product: None,
            ..valid()
        };
        assert!(missing.validate().is_err());

        let no_id = CreateProductSaleRequest {
            product: Some(ProductReference { id: None }),
            ..valid()
        };
        let errors = no_id.validate().unwrap_err();
        assert!(errors.errors().contains_key("product"));
    }

    #[test]
    fn rejects_zero_quantity_and_negative_price() {
        let zero = CreateProductSaleRequest {
            quantity: Some(0),
            ..valid()
        };
        assert!(zero.validate().is_err());

        let negative = CreateProductSaleRequest {
            purchase_price: Some(-0.5),
            ..valid()
        };
        assert!(negative.validate().is_err());

        let nan = CreateProductSaleRequest {
            purchase_price: Some(f64::NAN),
            ..valid()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn update_accepts_bare_id() {
        let req = UpdateProductSaleRequest {
            id: Some(4),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert!(UpdateProductSaleRequest::default().validate().is_err());
    }
}
