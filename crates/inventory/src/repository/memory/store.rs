use crate::model::{
    product::Product, product_sale::ProductSale, product_supply::ProductSupply,
};
use chrono::{Local, NaiveDateTime};
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};
use tokio::sync::RwLock;

/// Shared state behind the in-memory repositories. Locks are always taken
/// in the order products, sales, supplies.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub(super) products: RwLock<BTreeMap<i64, Product>>,
    pub(super) sales: RwLock<BTreeMap<i64, StoredSale>>,
    pub(super) supplies: RwLock<BTreeMap<i64, StoredSupply>>,
    product_seq: AtomicI64,
    sale_seq: AtomicI64,
    supply_seq: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn next_product_id(&self) -> i64 {
        self.product_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(super) fn next_sale_id(&self) -> i64 {
        self.sale_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(super) fn next_supply_id(&self) -> i64 {
        self.supply_seq.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub(super) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Sale row as kept in the store; the product is referenced by id and
/// joined on read.
#[derive(Debug, Clone)]
pub(super) struct StoredSale {
    pub id: i64,
    pub document_name: String,
    pub product_id: i64,
    pub quantity: Option<i32>,
    pub purchase_price: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl StoredSale {
    pub fn join(&self, product: &Product) -> ProductSale {
        ProductSale {
            id: self.id,
            document_name: self.document_name.clone(),
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            created_at: self.created_at,
            updated_at: self.updated_at,
            product: product.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct StoredSupply {
    pub id: i64,
    pub document_name: String,
    pub product_id: i64,
    pub quantity: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl StoredSupply {
    pub fn join(&self, product: &Product) -> ProductSupply {
        ProductSupply {
            id: self.id,
            document_name: self.document_name.clone(),
            quantity: self.quantity,
            created_at: self.created_at,
            updated_at: self.updated_at,
            product: product.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_issued_per_entity_starting_at_one() {
        let store = InMemoryStore::new();
        assert_eq!(store.next_product_id(), 1);
        assert_eq!(store.next_product_id(), 2);
        assert_eq!(store.next_sale_id(), 1);
        assert_eq!(store.next_supply_id(), 1);
    }
}
