use crate::{
    abstract_trait::{
        product::repository::DynProductQueryRepository,
        product_supply::{
            repository::{DynProductSupplyCommandRepository, DynProductSupplyQueryRepository},
            service::ProductSupplyCommandServiceTrait,
        },
    },
    domain::{
        requests::{CreateProductSupplyRequest, ProductReference, UpdateProductSupplyRequest},
        response::ProductSupplyResponse,
    },
    model::product_supply::ProductSupplyFields,
    service::{
        missing, or_missing_product, or_not_found, product_not_found, supply_not_found,
    },
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

pub struct ProductSupplyCommandService {
    products: DynProductQueryRepository,
    query: DynProductSupplyQueryRepository,
    command: DynProductSupplyCommandRepository,
    metrics: Metrics,
}

impl ProductSupplyCommandService {
    pub fn new(
        products: DynProductQueryRepository,
        query: DynProductSupplyQueryRepository,
        command: DynProductSupplyCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_supply_command_service");

        Self {
            products,
            query,
            command,
            metrics,
        }
    }

    /// Resolves `{"id": N}` to an existing product id.
    async fn resolve_product(&self, reference: &ProductReference) -> Result<i64, ServiceError> {
        let id = reference
            .id
            .ok_or_else(|| missing("product.id", "Product id is mandatory"))?;

        match self.products.find_by_id(id).await? {
            Some(product) => Ok(product.id),
            None => Err(product_not_found(id)),
        }
    }
}

#[async_trait]
impl ProductSupplyCommandServiceTrait for ProductSupplyCommandService {
    async fn add_product_supply(
        &self,
        req: &CreateProductSupplyRequest,
    ) -> Result<ApiResponse<ProductSupplyResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, "add_product_supply", async {
                req.validate()?;

                let reference = req
                    .product
                    .as_ref()
                    .ok_or_else(|| missing("product", "Product is mandatory"))?;
                let product_id = self.resolve_product(reference).await?;

                let fields = ProductSupplyFields {
                    document_name: req
                        .document_name
                        .clone()
                        .ok_or_else(|| missing("document_name", "Document name is mandatory"))?,
                    product_id,
                    quantity: req.quantity,
                };

                let supply = self
                    .command
                    .create_supply(&fields)
                    .await
                    .map_err(|e| or_not_found(e, || product_not_found(product_id)))?;
                info!(
                    "✅ Product supply {} added, product {} marked in stock",
                    supply.id, product_id
                );

                Ok::<_, ServiceError>(ApiResponse::created(supply.into()))
            })
            .await
    }

    async fn update_product_supply(
        &self,
        req: &UpdateProductSupplyRequest,
    ) -> Result<ApiResponse<ProductSupplyResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, "update_product_supply", async {
                req.validate()?;
                let id = req
                    .id
                    .ok_or_else(|| missing("id", "Product supply id is mandatory"))?;

                let existing = self
                    .query
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| supply_not_found(id))?;

                let mut fields = ProductSupplyFields::from(&existing);
                if let Some(document_name) = &req.document_name {
                    fields.document_name = document_name.clone();
                }
                if let Some(reference) = &req.product {
                    fields.product_id = self.resolve_product(reference).await?;
                }
                if let Some(quantity) = req.quantity {
                    fields.quantity = Some(quantity);
                }

                let supply = self
                    .command
                    .update_supply(id, &fields)
                    .await
                    .map_err(|e| or_missing_product(e, fields.product_id, || supply_not_found(id)))?;
                info!("🔄 Product supply {id} updated");

                Ok::<_, ServiceError>(ApiResponse::ok(supply.into()))
            })
            .await
    }

    async fn delete_product_supply(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        self.metrics
            .observe(Method::Delete, "delete_product_supply", async {
                if self.query.find_by_id(id).await?.is_none() {
                    return Err(supply_not_found(id));
                }

                self.command
                    .delete_supply(id)
                    .await
                    .map_err(|e| or_not_found(e, || supply_not_found(id)))?;
                info!("🗑️ Product supply {id} deleted");

                Ok(ApiResponse::empty(StatusCode::OK))
            })
            .await
    }
}
