use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{requests::SearchProductsRequest, response::ProductResponse},
    service::product_not_found,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::{ApiResponse, Pagination},
    errors::ServiceError,
    utils::{Method, Metrics},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn get_all_products(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        self.metrics
            .observe(Method::Get, "get_all_products", async {
                let products = self.query.find_all().await?;
                info!("✅ Retrieved {} products", products.len());

                let data = products.into_iter().map(ProductResponse::from).collect();
                Ok::<_, ServiceError>(ApiResponse::list(data))
            })
            .await
    }

    async fn get_product_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, "get_product_by_id", async {
                let product = self
                    .query
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| product_not_found(id))?;

                Ok::<_, ServiceError>(ApiResponse::ok(product.into()))
            })
            .await
    }

    async fn search_products(
        &self,
        req: &SearchProductsRequest,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        self.metrics
            .observe(Method::Get, "search_products", async {
                let search = req.to_search()?;
                info!(
                    "🔍 Searching products | filter: {:?}, sort: {:?}, page: {:?}",
                    search.filter, search.sort, search.page
                );

                let (products, total) = self.query.search(&search).await?;
                let data: Vec<ProductResponse> =
                    products.into_iter().map(ProductResponse::from).collect();

                Ok::<_, ServiceError>(match search.page {
                    Some(page) => {
                        ApiResponse::page(data, Pagination::new(page.page, page.size, total))
                    }
                    None => ApiResponse::list(data),
                })
            })
            .await
    }
}
