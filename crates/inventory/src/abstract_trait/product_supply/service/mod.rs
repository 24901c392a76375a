mod command;
mod query;

pub use self::command::{DynProductSupplyCommandService, ProductSupplyCommandServiceTrait};
pub use self::query::{DynProductSupplyQueryService, ProductSupplyQueryServiceTrait};
