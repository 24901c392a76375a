use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::{ProductFilter, ProductSearch, ProductSort, SortDirection, SortField},
    model::product::{Product as ProductModel, ProductFields},
    repository::memory::store::{InMemoryStore, now},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::{cmp::Ordering, sync::Arc};
use tracing::{error, info};

#[derive(Clone)]
pub struct InMemoryProductRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryProductRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn matches(product: &ProductModel, filter: &ProductFilter) -> bool {
    if let Some(name) = &filter.name {
        if !product.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }
    if filter.min_price.is_some_and(|min| product.price < min) {
        return false;
    }
    if filter.max_price.is_some_and(|max| product.price > max) {
        return false;
    }
    if filter.in_stock.is_some_and(|flag| product.in_stock != flag) {
        return false;
    }
    true
}

fn compare(a: &ProductModel, b: &ProductModel, sort: ProductSort) -> Ordering {
    let primary = match sort.field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::InStock => a.in_stock.cmp(&b.in_stock),
    };
    let primary = match sort.direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let products = self.store.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        let products = self.store.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn search(
        &self,
        search: &ProductSearch,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Searching products with {:?}", search.filter);

        let products = self.store.products.read().await;

        let mut found: Vec<ProductModel> = products
            .values()
            .filter(|p| matches(p, &search.filter))
            .cloned()
            .collect();
        drop(products);

        found.sort_by(|a, b| compare(a, b, search.sort));
        let total = found.len() as i64;

        let found = match search.page {
            Some(page) => found
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.size as usize)
                .collect(),
            None => found,
        };

        Ok((found, total))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(&self, fields: &ProductFields) -> Result<ProductModel, RepositoryError> {
        let mut products = self.store.products.write().await;

        let at = now();
        let product = ProductModel {
            id: self.store.next_product_id(),
            name: fields.name.clone(),
            description: fields.description.clone(),
            price: fields.price,
            in_stock: fields.in_stock,
            created_at: at,
            updated_at: at,
        };
        products.insert(product.id, product.clone());

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i64,
        fields: &ProductFields,
    ) -> Result<ProductModel, RepositoryError> {
        let mut products = self.store.products.write().await;

        let product = products.get_mut(&id).ok_or_else(|| {
            error!("❌ Product ID {id} not found for update");
            RepositoryError::NotFound
        })?;

        product.name = fields.name.clone();
        product.description = fields.description.clone();
        product.price = fields.price;
        product.in_stock = fields.in_stock;
        product.updated_at = now();

        info!("🔄 Updated product ID {id}");
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        let mut products = self.store.products.write().await;
        let sales = self.store.sales.read().await;
        let supplies = self.store.supplies.read().await;

        if !products.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }

        if sales.values().any(|s| s.product_id == id)
            || supplies.values().any(|s| s.product_id == id)
        {
            error!("❌ Product ID {id} is still referenced by sales or supplies");
            return Err(RepositoryError::ForeignKey(format!(
                "product {id} is still referenced by sales or supplies"
            )));
        }

        products.remove(&id);
        info!("🗑️ Deleted product ID {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::PageRequest;

    fn fields(name: &str, price: f64, in_stock: bool) -> ProductFields {
        ProductFields {
            name: name.into(),
            description: String::new(),
            price,
            in_stock,
        }
    }

    async fn seeded() -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new(Arc::new(InMemoryStore::new()));
        for (name, price, in_stock) in [
            ("Desk Lamp", 30.0, true),
            ("Floor Lamp", 80.0, false),
            ("Chair", 45.0, true),
            ("lamp shade", 10.0, true),
        ] {
            repo.create_product(&fields(name, price, in_stock))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn filters_compose_conjunctively() {
        let repo = seeded().await;

        let search = ProductSearch {
            filter: ProductFilter {
                name: Some("LAMP".into()),
                min_price: Some(10.0),
                max_price: Some(30.0),
                in_stock: Some(true),
            },
            ..Default::default()
        };

        let (found, total) = repo.search(&search).await.unwrap();
        let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(total, 2);
        assert_eq!(names, vec!["Desk Lamp", "lamp shade"]);
    }

    #[tokio::test]
    async fn sorts_and_pages_with_total_of_all_matches() {
        let repo = seeded().await;

        let search = ProductSearch {
            sort: "price,desc".parse().unwrap(),
            page: Some(PageRequest { page: 1, size: 2 }),
            ..Default::default()
        };

        let (found, total) = repo.search(&search).await.unwrap();
        let prices: Vec<_> = found.iter().map(|p| p.price).collect();

        assert_eq!(total, 4);
        assert_eq!(prices, vec![30.0, 10.0]);
    }

    #[tokio::test]
    async fn name_sort_ignores_case() {
        let repo = seeded().await;
        repo.create_product(&fields("bench", 15.0, true))
            .await
            .unwrap();

        let search = ProductSearch {
            sort: "name".parse().unwrap(),
            ..Default::default()
        };

        let (found, _) = repo.search(&search).await.unwrap();
        let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["bench", "Chair", "Desk Lamp", "Floor Lamp", "lamp shade"]
        );
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_ids_are_not_found() {
        let repo = seeded().await;

        let err = repo
            .update_product(99, &fields("x", 1.0, false))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));

        let err = repo.delete_product(99).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn ids_are_sequential_and_find_all_is_ordered() {
        let repo = seeded().await;
        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
