pub mod product;
pub mod product_sale;
pub mod product_supply;
