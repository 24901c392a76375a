use crate::{
    abstract_trait::product_sale::repository::{
        ProductSaleCommandRepositoryTrait, ProductSaleQueryRepositoryTrait,
    },
    model::product_sale::{ProductSale as ProductSaleModel, ProductSaleFields},
    repository::memory::store::{InMemoryStore, StoredSale, now},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct InMemoryProductSaleRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryProductSaleRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn dangling(sale_id: i64, product_id: i64) -> RepositoryError {
    RepositoryError::Custom(format!(
        "sale {sale_id} references missing product {product_id}"
    ))
}

#[async_trait]
impl ProductSaleQueryRepositoryTrait for InMemoryProductSaleRepository {
    async fn find_all(&self) -> Result<Vec<ProductSaleModel>, RepositoryError> {
        let products = self.store.products.read().await;
        let sales = self.store.sales.read().await;

        sales
            .values()
            .map(|sale| {
                products
                    .get(&sale.product_id)
                    .map(|product| sale.join(product))
                    .ok_or_else(|| dangling(sale.id, sale.product_id))
            })
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSaleModel>, RepositoryError> {
        let products = self.store.products.read().await;
        let sales = self.store.sales.read().await;

        match sales.get(&id) {
            Some(sale) => products
                .get(&sale.product_id)
                .map(|product| Some(sale.join(product)))
                .ok_or_else(|| dangling(sale.id, sale.product_id)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductSaleCommandRepositoryTrait for InMemoryProductSaleRepository {
    async fn create_sale(
        &self,
        fields: &ProductSaleFields,
    ) -> Result<ProductSaleModel, RepositoryError> {
        let mut products = self.store.products.write().await;
        let mut sales = self.store.sales.write().await;

        let product = products.get_mut(&fields.product_id).ok_or_else(|| {
            error!("❌ Product ID {} not found for sale", fields.product_id);
            RepositoryError::NotFound
        })?;

        let at = now();
        product.in_stock = false;
        product.updated_at = at;

        let sale = StoredSale {
            id: self.store.next_sale_id(),
            document_name: fields.document_name.clone(),
            product_id: fields.product_id,
            quantity: fields.quantity,
            purchase_price: fields.purchase_price,
            created_at: at,
            updated_at: at,
        };
        sales.insert(sale.id, sale.clone());

        info!(
            "✅ Created sale ID {} for product ID {}",
            sale.id, fields.product_id
        );
        Ok(sale.join(product))
    }

    async fn update_sale(
        &self,
        id: i64,
        fields: &ProductSaleFields,
    ) -> Result<ProductSaleModel, RepositoryError> {
        let products = self.store.products.read().await;
        let mut sales = self.store.sales.write().await;

        let sale = sales.get_mut(&id).ok_or_else(|| {
            error!("❌ Sale ID {id} not found for update");
            RepositoryError::NotFound
        })?;
        let product = products.get(&fields.product_id).ok_or_else(|| {
            error!("❌ Product ID {} not found for sale update", fields.product_id);
            RepositoryError::ForeignKey(format!("product {} does not exist", fields.product_id))
        })?;

        sale.document_name = fields.document_name.clone();
        sale.product_id = fields.product_id;
        sale.quantity = fields.quantity;
        sale.purchase_price = fields.purchase_price;
        sale.updated_at = now();

        info!("🔄 Updated sale ID {id}");
        Ok(sale.join(product))
    }

    async fn delete_sale(&self, id: i64) -> Result<(), RepositoryError> {
        let mut sales = self.store.sales.write().await;

        if sales.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted sale ID {id}");
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

    fn repos() -> (InMemoryProductRepository, InMemoryProductSaleRepository) {
        let store = Arc::new(InMemoryStore::new());
        (
            InMemoryProductRepository::new(store.clone()),
            InMemoryProductSaleRepository::new(store),
        )
    }

    fn sale_of(product_id: i64) -> ProductSaleFields {
        ProductSaleFields {
            document_name: "INV-1".into(),
            product_id,
            quantity: Some(1),
            purchase_price: Some(5.0),
        }
    }

    #[tokio::test]
    async fn creating_a_sale_marks_product_out_of_stock() {
        let (products, sales) = repos();
        let product = products
            .create_product(&ProductFields {
                name: "Kettle".into(),
                description: String::new(),
                price: 20.0,
                in_stock: true,
            })
            .await
            .unwrap();

        let sale = sales.create_sale(&sale_of(product.id)).await.unwrap();

        assert!(!sale.product.in_stock);
        let stored = products.find_by_id(product.id).await.unwrap().unwrap();
        assert!(!stored.in_stock);
    }

    #[tokio::test]
    async fn sale_for_missing_product_is_not_found_and_not_stored() {
        let (_, sales) = repos();

        let err = sales.create_sale(&sale_of(42)).await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound));
        assert!(sales.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn referenced_product_cannot_be_deleted() {
        let (products, sales) = repos();
        let product = products
            .create_product(&ProductFields {
                name: "Kettle".into(),
                description: String::new(),
                price: 20.0,
                in_stock: true,
            })
            .await
            .unwrap();
        let sale = sales.create_sale(&sale_of(product.id)).await.unwrap();

        let err = products.delete_product(product.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));

        sales.delete_sale(sale.id).await.unwrap();
        products.delete_product(product.id).await.unwrap();
    }

    #[tokio::test]
    async fn moving_a_sale_to_a_missing_product_is_a_foreign_key_error() {
        let (products, sales) = repos();
        let product = products
            .create_product(&ProductFields {
                name: "Kettle".into(),
                description: String::new(),
                price: 20.0,
                in_stock: true,
            })
            .await
            .unwrap();
        let sale = sales.create_sale(&sale_of(product.id)).await.unwrap();

        let err = sales.update_sale(sale.id, &sale_of(99)).await.unwrap_err();

        assert!(matches!(err, RepositoryError::ForeignKey(_)));
        let stored = sales.find_by_id(sale.id).await.unwrap().unwrap();
        assert_eq!(stored.product.id, product.id);
    }
}
