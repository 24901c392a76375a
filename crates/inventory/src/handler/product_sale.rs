use crate::{
    abstract_trait::product_sale::service::{DynProductSaleCommandService, DynProductSaleQueryService},
    domain::{
        requests::{CreateProductSaleRequest, UpdateProductSaleRequest},
        response::ProductSaleResponse,
    },
    handler::AtPath,
    middleware::validate::{IdPath, ValidatedJson},
    state::AppState,
};
use axum::{
    extract::{Extension, OriginalUri},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{domain::responses::ApiResponse, errors::ErrorResponse};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/product-sale/all",
    tag = "Product sale",
    responses(
        (status = 200, description = "All product sales with their product", body = ApiResponse<Vec<ProductSaleResponse>>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_all_product_sales(
    Extension(service): Extension<DynProductSaleQueryService>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.get_all_product_sales().await.at_path(&uri)
}

#[utoipa::path(
    get,
    path = "/product-sale/{id}",
    tag = "Product sale",
    params(("id" = i64, Path, description = "Product sale ID")),
    responses(
        (status = 200, description = "Product sale details", body = ApiResponse<ProductSaleResponse>),
        (status = 404, description = "Product sale not found", body = ErrorResponse)
    )
)]
pub async fn get_product_sale(
    Extension(service): Extension<DynProductSaleQueryService>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.get_product_sale_by_id(id).await.at_path(&uri)
}

#[utoipa::path(
    post,
    path = "/product-sale/add",
    tag = "Product sale",
    request_body = CreateProductSaleRequest,
    responses(
        (status = 201, description = "Product sale recorded, product marked out of stock", body = ApiResponse<ProductSaleResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Referenced product not found", body = ErrorResponse)
    )
)]
pub async fn add_product_sale(
    Extension(service): Extension<DynProductSaleCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<CreateProductSaleRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.add_product_sale(&body).await.at_path(&uri)
}

#[utoipa::path(
    put,
    path = "/product-sale/update",
    tag = "Product sale",
    request_body = UpdateProductSaleRequest,
    responses(
        (status = 200, description = "Product sale updated", body = ApiResponse<ProductSaleResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product sale or product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_sale(
    Extension(service): Extension<DynProductSaleCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<UpdateProductSaleRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.update_product_sale(&body).await.at_path(&uri)
}

#[utoipa::path(
    delete,
    path = "/product-sale/delete/{id}",
    tag = "Product sale",
    params(("id" = i64, Path, description = "Product sale ID")),
    responses(
        (status = 200, description = "Product sale deleted"),
        (status = 404, description = "Product sale not found", body = ErrorResponse)
    )
)]
pub async fn delete_product_sale(
    Extension(service): Extension<DynProductSaleCommandService>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.delete_product_sale(id).await.at_path(&uri)
}

pub fn product_sale_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product-sale/all", get(get_all_product_sales))
        .route("/product-sale/{id}", get(get_product_sale))
        .route("/product-sale/add", post(add_product_sale))
        .route("/product-sale/update", put(update_product_sale))
        .route("/product-sale/delete/{id}", delete(delete_product_sale))
        .layer(Extension(app_state.di_container.product_sale_query.clone()))
        .layer(Extension(app_state.di_container.product_sale_command.clone()))
}
