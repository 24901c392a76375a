mod product;
mod product_sale;
mod product_supply;

pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::product_sale::{ProductSaleCommandRepository, ProductSaleQueryRepository};
pub use self::product_supply::{ProductSupplyCommandRepository, ProductSupplyQueryRepository};
