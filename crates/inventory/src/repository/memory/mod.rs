mod product;
mod product_sale;
mod product_supply;
mod store;

pub use self::product::InMemoryProductRepository;
pub use self::product_sale::InMemoryProductSaleRepository;
pub use self::product_supply::InMemoryProductSupplyRepository;
pub use self::store::InMemoryStore;
