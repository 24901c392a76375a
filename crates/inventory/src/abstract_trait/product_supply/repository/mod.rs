mod command;
mod query;

pub use self::command::{DynProductSupplyCommandRepository, ProductSupplyCommandRepositoryTrait};
pub use self::query::{DynProductSupplyQueryRepository, ProductSupplyQueryRepositoryTrait};
