pub mod memory;
pub mod postgres;

use crate::abstract_trait::{
    product::repository::{DynProductCommandRepository, DynProductQueryRepository},
    product_sale::repository::{DynProductSaleCommandRepository, DynProductSaleQueryRepository},
    product_supply::repository::{
        DynProductSupplyCommandRepository, DynProductSupplyQueryRepository,
    },
};
use shared::config::ConnectionPool;
use std::sync::Arc;

/// One query/command pair per entity, all backed by the same storage.
#[derive(Clone)]
pub struct Repositories {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub sale_query: DynProductSaleQueryRepository,
    pub sale_command: DynProductSaleCommandRepository,
    pub supply_query: DynProductSupplyQueryRepository,
    pub supply_command: DynProductSupplyCommandRepository,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::InMemoryStore::new());

        let products = Arc::new(memory::InMemoryProductRepository::new(store.clone()));
        let sales = Arc::new(memory::InMemoryProductSaleRepository::new(store.clone()));
        let supplies = Arc::new(memory::InMemoryProductSupplyRepository::new(store));

        Self {
            product_query: products.clone(),
            product_command: products,
            sale_query: sales.clone(),
            sale_command: sales,
            supply_query: supplies.clone(),
            supply_command: supplies,
        }
    }

    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            product_query: Arc::new(postgres::ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(postgres::ProductCommandRepository::new(pool.clone())),
            sale_query: Arc::new(postgres::ProductSaleQueryRepository::new(pool.clone())),
            sale_command: Arc::new(postgres::ProductSaleCommandRepository::new(pool.clone())),
            supply_query: Arc::new(postgres::ProductSupplyQueryRepository::new(pool.clone())),
            supply_command: Arc::new(postgres::ProductSupplyCommandRepository::new(pool)),
        }
    }
}
