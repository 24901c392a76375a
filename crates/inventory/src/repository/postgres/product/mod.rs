mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

pub(super) const PRODUCT_COLUMNS: &str =
    "id, name, description, price, in_stock, created_at, updated_at";
