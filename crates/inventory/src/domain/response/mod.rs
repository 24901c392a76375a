mod product;
mod product_sale;
mod product_supply;

pub use self::product::ProductResponse;
pub use self::product_sale::ProductSaleResponse;
pub use self::product_supply::ProductSupplyResponse;

use chrono::NaiveDateTime;

pub(crate) fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}
