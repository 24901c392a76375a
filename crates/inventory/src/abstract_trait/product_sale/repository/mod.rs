mod command;
mod query;

pub use self::command::{DynProductSaleCommandRepository, ProductSaleCommandRepositoryTrait};
pub use self::query::{DynProductSaleQueryRepository, ProductSaleQueryRepositoryTrait};
