use crate::{
    abstract_trait::{
        product::repository::DynProductQueryRepository,
        product_sale::{
            repository::{DynProductSaleCommandRepository, DynProductSaleQueryRepository},
            service::ProductSaleCommandServiceTrait,
        },
    },
    domain::{
        requests::{CreateProductSaleRequest, ProductReference, UpdateProductSaleRequest},
        response::ProductSaleResponse,
    },
    model::product_sale::ProductSaleFields,
    service::{missing, or_missing_product, or_not_found, product_not_found, sale_not_found},
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

pub struct ProductSaleCommandService {
    products: DynProductQueryRepository,
    query: DynProductSaleQueryRepository,
    command: DynProductSaleCommandRepository,
    metrics: Metrics,
}

impl ProductSaleCommandService {
    pub fn new(
        products: DynProductQueryRepository,
        query: DynProductSaleQueryRepository,
        command: DynProductSaleCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_sale_command_service");

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
impl ProductSaleCommandServiceTrait for ProductSaleCommandService {
    async fn add_product_sale(
        &self,
        req: &CreateProductSaleRequest,
    ) -> Result<ApiResponse<ProductSaleResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, "add_product_sale", async {
                req.validate()?;

                let reference = req
                    .product
                    .as_ref()
                    .ok_or_else(|| missing("product", "Product is mandatory"))?;
                let product_id = self.resolve_product(reference).await?;

                let fields = ProductSaleFields {
                    document_name: req
                        .document_name
                        .clone()
                        .ok_or_else(|| missing("document_name", "Document name is mandatory"))?,
                    product_id,
                    quantity: req.quantity,
                    purchase_price: req.purchase_price,
                };

                let sale = self
                    .command
                    .create_sale(&fields)
                    .await
                    .map_err(|e| or_not_found(e, || product_not_found(product_id)))?;
                info!(
                    "✅ Product sale {} added, product {} marked out of stock",
                    sale.id, product_id
                );

                Ok::<_, ServiceError>(ApiResponse::created(sale.into()))
            })
            .await
    }

    async fn update_product_sale(
        &self,
        req: &UpdateProductSaleRequest,
    ) -> Result<ApiResponse<ProductSaleResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, "update_product_sale", async {
                req.validate()?;
                let id = req
                    .id
                    .ok_or_else(|| missing("id", "Product sale id is mandatory"))?;

                let existing = self
                    .query
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| sale_not_found(id))?;

                let mut fields = ProductSaleFields::from(&existing);
                if let Some(document_name) = &req.document_name {
                    fields.document_name = document_name.clone();
                }
                if let Some(reference) = &req.product {
                    fields.product_id = self.resolve_product(reference).await?;
                }
                if let Some(quantity) = req.quantity {
                    fields.quantity = Some(quantity);
                }
                if let Some(purchase_price) = req.purchase_price {
                    fields.purchase_price = Some(purchase_price);
                }

                let sale = self
                    .command
                    .update_sale(id, &fields)
                    .await
                    .map_err(|e| or_missing_product(e, fields.product_id, || sale_not_found(id)))?;
                info!("🔄 Product sale {id} updated");

                Ok::<_, ServiceError>(ApiResponse::ok(sale.into()))
            })
            .await
    }

    async fn delete_product_sale(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        self.metrics
            .observe(Method::Delete, "delete_product_sale", async {
                if self.query.find_by_id(id).await?.is_none() {
                    return Err(sale_not_found(id));
                }

                self.command
                    .delete_sale(id)
                    .await
                    .map_err(|e| or_not_found(e, || sale_not_found(id)))?;
                info!("🗑️ Product sale {id} deleted");

                Ok(ApiResponse::empty(StatusCode::OK))
            })
            .await
    }
}
