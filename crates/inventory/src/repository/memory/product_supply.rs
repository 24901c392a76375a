use crate::{
    abstract_trait::product_supply::repository::{
        ProductSupplyCommandRepositoryTrait, ProductSupplyQueryRepositoryTrait,
    },
    model::product_supply::{ProductSupply as ProductSupplyModel, ProductSupplyFields},
    repository::memory::store::{InMemoryStore, StoredSupply, now},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct InMemoryProductSupplyRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryProductSupplyRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn dangling(supply_id: i64, product_id: i64) -> RepositoryError {
    RepositoryError::Custom(format!(
        "supply {supply_id} references missing product {product_id}"
    ))
}

#[async_trait]
impl ProductSupplyQueryRepositoryTrait for InMemoryProductSupplyRepository {
    async fn find_all(&self) -> Result<Vec<ProductSupplyModel>, RepositoryError> {
        let products = self.store.products.read().await;
        let supplies = self.store.supplies.read().await;

        supplies
            .values()
            .map(|supply| {
                products
                    .get(&supply.product_id)
                    .map(|product| supply.join(product))
                    .ok_or_else(|| dangling(supply.id, supply.product_id))
            })
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSupplyModel>, RepositoryError> {
        let products = self.store.products.read().await;
        let supplies = self.store.supplies.read().await;

        match supplies.get(&id) {
            Some(supply) => products
                .get(&supply.product_id)
                .map(|product| Some(supply.join(product)))
                .ok_or_else(|| dangling(supply.id, supply.product_id)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductSupplyCommandRepositoryTrait for InMemoryProductSupplyRepository {
    async fn create_supply(
        &self,
        fields: &ProductSupplyFields,
    ) -> Result<ProductSupplyModel, RepositoryError> {
        let mut products = self.store.products.write().await;
        let mut supplies = self.store.supplies.write().await;

        let product = products.get_mut(&fields.product_id).ok_or_else(|| {
            error!("❌ Product ID {} not found for supply", fields.product_id);
            RepositoryError::NotFound
        })?;

        let at = now();
        product.in_stock = true;
        product.updated_at = at;

        let supply = StoredSupply {
            id: self.store.next_supply_id(),
            document_name: fields.document_name.clone(),
            product_id: fields.product_id,
            quantity: fields.quantity,
            created_at: at,
            updated_at: at,
        };
        supplies.insert(supply.id, supply.clone());

        info!(
            "✅ Created supply ID {} for product ID {}",
            supply.id, fields.product_id
        );
        Ok(supply.join(product))
    }

    async fn update_supply(
        &self,
        id: i64,
        fields: &ProductSupplyFields,
    ) -> Result<ProductSupplyModel, RepositoryError> {
        let products = self.store.products.read().await;
        let mut supplies = self.store.supplies.write().await;

        let supply = supplies.get_mut(&id).ok_or_else(|| {
            error!("❌ Supply ID {id} not found for update");
            RepositoryError::NotFound
        })?;
        let product = products.get(&fields.product_id).ok_or_else(|| {
            error!("❌ Product ID {} not found for supply update", fields.product_id);
            RepositoryError::ForeignKey(format!("product {} does not exist", fields.product_id))
        })?;

        supply.document_name = fields.document_name.clone();
        supply.product_id = fields.product_id;
        supply.quantity = fields.quantity;
        supply.updated_at = now();

        info!("🔄 Updated supply ID {id}");
        Ok(supply.join(product))
    }

    async fn delete_supply(&self, id: i64) -> Result<(), RepositoryError> {
        let mut supplies = self.store.supplies.write().await;

        if supplies.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted supply ID {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::{
            ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
        },
        model::product::ProductFields,
        repository::memory::InMemoryProductRepository,
    };

    #[tokio::test]
    async fn creating_a_supply_marks_product_in_stock() {
        let store = Arc::new(InMemoryStore::new());
        let products = InMemoryProductRepository::new(store.clone());
        let supplies = InMemoryProductSupplyRepository::new(store);

        let product = products
            .create_product(&ProductFields {
                name: "Kettle".into(),
                description: String::new(),
                price: 20.0,
                in_stock: false,
            })
            .await
            .unwrap();

        let supply = supplies
            .create_supply(&ProductSupplyFields {
                document_name: "W-1".into(),
                product_id: product.id,
                quantity: Some(10),
            })
            .await
            .unwrap();

        assert!(supply.product.in_stock);
        assert!(products.find_by_id(product.id).await.unwrap().unwrap().in_stock);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_supply_are_not_found() {
        let supplies = InMemoryProductSupplyRepository::new(Arc::new(InMemoryStore::new()));

        let err = supplies
            .update_supply(
                3,
                &ProductSupplyFields {
                    document_name: "W-1".into(),
                    product_id: 1,
                    quantity: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));

        let err = supplies.delete_supply(3).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn moving_a_supply_to_a_missing_product_is_a_foreign_key_error() {
        let store = Arc::new(InMemoryStore::new());
        let products = InMemoryProductRepository::new(store.clone());
        let supplies = InMemoryProductSupplyRepository::new(store);
        let product = products
            .create_product(&ProductFields {
                name: "Kettle".into(),
                description: String::new(),
                price: 20.0,
                in_stock: false,
            })
            .await
            .unwrap();
        let supply = supplies
            .create_supply(&ProductSupplyFields {
                document_name: "W-1".into(),
                product_id: product.id,
                quantity: Some(10),
            })
            .await
            .unwrap();

        let err = supplies
            .update_supply(
                supply.id,
                &ProductSupplyFields {
                    document_name: "W-2".into(),
                    product_id: 99,
                    quantity: Some(10),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ForeignKey(_)));
        let stored = supplies.find_by_id(supply.id).await.unwrap().unwrap();
        assert_eq!(stored.document_name, "W-1");
    }
}
