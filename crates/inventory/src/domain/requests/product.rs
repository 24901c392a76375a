use serde::{Deserialize, Serialize};
use shared::{
    errors::ServiceError,
    utils::{validate_finite, validate_not_blank},
};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(
        required(message = "Name is mandatory"),
        length(max = 255, message = "Name must be less than 255 characters"),
        custom(function = "validate_not_blank", message = "Name is mandatory")
    )]
    #[schema(example = "Notebook")]
    pub name: Option<String>,

    #[validate(length(max = 4096, message = "Description must be less than 4096 characters"))]
    #[schema(example = "A5, dotted")]
    pub description: Option<String>,

    #[validate(
        range(min = 0.0, message = "Price must be greater than or equal to 0"),
        custom(function = "validate_finite", message = "Price must be a finite number")
    )]
    #[schema(example = 100.0)]
    pub price: Option<f64>,

    pub in_stock: Option<bool>,
}

/// Partial update: only fields present in the payload are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(required(message = "Product id is mandatory"))]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[validate(
        length(max = 255, message = "Name must be less than 255 characters"),
        custom(function = "validate_not_blank", message = "Name must not be blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 4096, message = "Description must be less than 4096 characters"))]
    pub description: Option<String>,

    #[validate(
        range(min = 0.0, message = "Price must be greater than or equal to 0"),
        custom(function = "validate_finite", message = "Price must be a finite number")
    )]
    pub price: Option<f64>,

    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteProductRequest {
    #[validate(required(message = "Product id is mandatory"))]
    #[schema(example = 1)]
    pub id: Option<i64>,
}

/// Query string of `GET /product/search`. Omitting both `page` and `size`
/// returns every match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchProductsRequest {
    /// Case-insensitive substring of the product name
    pub name: Option<String>,

    #[validate(
        range(min = 0.0, message = "minPrice must be greater than or equal to 0"),
        custom(function = "validate_finite", message = "minPrice must be a finite number")
    )]
    pub min_price: Option<f64>,

    #[validate(
        range(min = 0.0, message = "maxPrice must be greater than or equal to 0"),
        custom(function = "validate_finite", message = "maxPrice must be a finite number")
    )]
    pub max_price: Option<f64>,

    pub in_stock: Option<bool>,

    /// Zero-based page index
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 1000, message = "size must be between 1 and 1000"))]
    pub size: Option<u32>,

    /// `field[,asc|desc]` where field is one of id, name, price, inStock
    #[param(example = "price,desc")]
    pub sort: Option<String>,
}

impl SearchProductsRequest {
    pub fn to_search(&self) -> Result<ProductSearch, ServiceError> {
        self.validate()?;

        let sort = match self.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<ProductSort>()
                .map_err(|msg| ServiceError::Validation(vec![format!("sort: {msg}")]))?,
            _ => ProductSort::default(),
        };

        let page = match (self.page, self.size) {
            (None, None) => None,
            (page, size) => Some(PageRequest {
                page: page.unwrap_or(0),
                size: size.unwrap_or(DEFAULT_PAGE_SIZE),
            }),
        };

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(ProductSearch {
            filter: ProductFilter {
                name,
                min_price: self.min_price,
                max_price: self.max_price,
                in_stock: self.in_stock,
            },
            sort,
            page,
        })
    }
}

/// Every filter is optional; present ones are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Price,
    InStock,
}

impl SortField {
    /// SQL `ORDER BY` expression. Names sort case-insensitively in byte order
    /// so the result does not depend on the database collation.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "LOWER(name) COLLATE \"C\"",
            SortField::Price => "price",
            SortField::InStock => "in_stock",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl FromStr for ProductSort {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split(',').map(str::trim);

        let field = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("id") => SortField::Id,
            Some("name") => SortField::Name,
            Some("price") => SortField::Price,
            Some("instock") | Some("in_stock") => SortField::InStock,
            Some(other) => return Err(format!("unsupported sort field '{other}'")),
            None => SortField::default(),
        };

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => return Err(format!("unsupported sort direction '{other}'")),
        };

        if parts.next().is_some() {
            return Err(format!("malformed sort '{raw}'"));
        }

        Ok(Self { field, direction })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearch {
    pub filter: ProductFilter,
    pub sort: ProductSort,
    pub page: Option<PageRequest>,
}
