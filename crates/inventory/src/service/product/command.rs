use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ProductResponse,
    },
    model::product::ProductFields,
    service::{missing, or_not_found, product_not_found},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics},
};
use tracing::info;
use validator::Validate;

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service");

        Self {
            query,
            command,
            metrics,
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn add_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, "add_product", async {
                req.validate()?;

                let fields = ProductFields {
                    name: req
                        .name
                        .clone()
                        .ok_or_else(|| missing("name", "Name is mandatory"))?,
                    description: req.description.clone().unwrap_or_default(),
                    price: req.price.unwrap_or(0.0),
                    in_stock: req.in_stock.unwrap_or(false),
                };

                let product = self.command.create_product(&fields).await?;
                info!("✅ Product added with id {}", product.id);

                Ok::<_, ServiceError>(ApiResponse::created(product.into()))
            })
            .await
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, "update_product", async {
                req.validate()?;
                let id = req
                    .id
                    .ok_or_else(|| missing("id", "Product id is mandatory"))?;

                let existing = self
                    .query
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| product_not_found(id))?;

                let mut fields = ProductFields::from(&existing);
                if let Some(name) = &req.name {
                    fields.name = name.clone();
                }
                if let Some(description) = &req.description {
                    fields.description = description.clone();
                }
                if let Some(price) = req.price {
                    fields.price = price;
                }
                if let Some(in_stock) = req.in_stock {
                    fields.in_stock = in_stock;
                }

                let product = self
                    .command
                    .update_product(id, &fields)
                    .await
                    .map_err(|e| or_not_found(e, || product_not_found(id)))?;
                info!("🔄 Product {id} updated");

                Ok::<_, ServiceError>(ApiResponse::ok(product.into()))
            })
            .await
    }

    async fn delete_product(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        self.metrics
            .observe(Method::Delete, "delete_product", async {
                if self.query.find_by_id(id).await?.is_none() {
                    return Err(product_not_found(id));
                }

                self.command
                    .delete_product(id)
                    .await
                    .map_err(|e| or_not_found(e, || product_not_found(id)))?;
                info!("🗑️ Product {id} deleted");

                Ok::<_, ServiceError>(ApiResponse::empty(StatusCode::OK))
            })
            .await
    }
}
