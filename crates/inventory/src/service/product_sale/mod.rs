mod command;
mod query;

pub use self::command::ProductSaleCommandService;
pub use self::query::ProductSaleQueryService;
