mod command;
mod query;

pub use self::command::{DynProductSaleCommandService, ProductSaleCommandServiceTrait};
pub use self::query::{DynProductSaleQueryService, ProductSaleQueryServiceTrait};
