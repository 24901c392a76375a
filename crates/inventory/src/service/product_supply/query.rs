use crate::{
    abstract_trait::product_supply::{
        repository::DynProductSupplyQueryRepository, service::ProductSupplyQueryServiceTrait,
    },
    domain::response::ProductSupplyResponse,
    service::supply_not_found,
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
pub struct ProductSupplyQueryService {
    query: DynProductSupplyQueryRepository,
    metrics: Metrics,
}

impl ProductSupplyQueryService {
    pub fn new(query: DynProductSupplyQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_supply_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductSupplyQueryServiceTrait for ProductSupplyQueryService {
    async fn get_all_product_supplies(
        &self,
    ) -> Result<ApiResponse<Vec<ProductSupplyResponse>>, ServiceError> {
        self.metrics
            .observe(Method::Get, "get_all_product_supplies", async {
                let supplies = self.query.find_all().await?;
                info!("✅ Retrieved {} product supplies", supplies.len());

                let data = supplies.into_iter().map(ProductSupplyResponse::from).collect();
                Ok::<_, ServiceError>(ApiResponse::list(data))
            })
            .await
    }

    async fn get_product_supply_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductSupplyResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, "get_product_supply_by_id", async {
                let supply = self
                    .query
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| supply_not_found(id))?;

                Ok::<_, ServiceError>(ApiResponse::ok(supply.into()))
            })
            .await
    }
}
