use crate::{
    abstract_trait::product_sale::{
        repository::DynProductSaleQueryRepository, service::ProductSaleQueryServiceTrait,
    },
    domain::response::ProductSaleResponse,
    service::sale_not_found,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductSaleQueryService {
    query: DynProductSaleQueryRepository,
    metrics: Metrics,
}

impl ProductSaleQueryService {
    pub fn new(query: DynProductSaleQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_sale_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductSaleQueryServiceTrait for ProductSaleQueryService {
    async fn get_all_product_sales(
        &self,
    ) -> Result<ApiResponse<Vec<ProductSaleResponse>>, ServiceError> {
        self.metrics
            .observe(Method::Get, "get_all_product_sales", async {
                let sales = self.query.find_all().await?;
                info!("✅ Retrieved {} product sales", sales.len());

                let data = sales.into_iter().map(ProductSaleResponse::from).collect();
                Ok::<_, ServiceError>(ApiResponse::list(data))
            })
            .await
    }

    async fn get_product_sale_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductSaleResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, "get_product_sale_by_id", async {
                let sale = self
                    .query
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| sale_not_found(id))?;

                Ok::<_, ServiceError>(ApiResponse::ok(sale.into()))
            })
            .await
    }
}
