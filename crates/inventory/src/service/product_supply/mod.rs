mod command;
mod query;

pub use self::command::ProductSupplyCommandService;
pub use self::query::ProductSupplyQueryService;
