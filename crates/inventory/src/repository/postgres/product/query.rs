use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::{ProductFilter, ProductSearch, SortField},
    model::product::Product as ProductModel,
    repository::postgres::product::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    builder.push(" WHERE TRUE");

    if let Some(name) = &filter.name {
        builder
            .push(" AND name ILIKE ")
            .push_bind(format!("%{}%", escape_like(name)));
    }
    if let Some(min) = filter.min_price {
        builder.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        builder.push(" AND price <= ").push_bind(max);
    }
    if let Some(in_stock) = filter.in_stock {
        builder.push(" AND in_stock = ").push_bind(in_stock);
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");

        sqlx::query_as::<_, ProductModel>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }

    async fn search(
        &self,
        search: &ProductSearch,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Searching products with {:?}", search.filter);

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filter(&mut count, &search.filter);

        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {:?}", e);
                RepositoryError::from(e)
            })?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        push_filter(&mut select, &search.filter);

        select
            .push(" ORDER BY ")
            .push(search.sort.field.column())
            .push(" ")
            .push(search.sort.direction.keyword());
        if search.sort.field != SortField::Id {
            select.push(", id ASC");
        }

        if let Some(page) = search.page {
            select
                .push(" LIMIT ")
                .push_bind(page.limit())
                .push(" OFFSET ")
                .push_bind(page.offset());
        }

        let products = select
            .build_query_as::<ProductModel>()
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to search products: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} of {} matching products", products.len(), total);
        Ok((products, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{PageRequest, ProductSort, SortDirection};

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn filter_renders_only_present_conditions() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filter(
            &mut builder,
            &ProductFilter {
                name: Some("lamp".into()),
                in_stock: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM products WHERE TRUE AND name ILIKE $1 AND in_stock = $2"
        );
    }

    #[test]
    fn sort_columns_are_whitelisted() {
        let sort = ProductSort {
            field: SortField::InStock,
            direction: SortDirection::Desc,
        };
        assert_eq!(sort.field.column(), "in_stock");
        assert_eq!(sort.direction.keyword(), "DESC");
        assert_eq!(PageRequest { page: 3, size: 10 }.offset(), 30);
    }

    #[test]
    fn name_sort_is_pinned_to_byte_order() {
        assert_eq!(SortField::Name.column(), "LOWER(name) COLLATE \"C\"");
    }
}
