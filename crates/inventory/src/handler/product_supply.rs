use crate::{
    abstract_trait::product_supply::service::{DynProductSupplyCommandService, DynProductSupplyQueryService},
    domain::{
        requests::{CreateProductSupplyRequest, UpdateProductSupplyRequest},
        response::ProductSupplyResponse,
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
    path = "/product-supply/all",
    tag = "Product supply",
    responses(
        (status = 200, description = "All product supplys with their product", body = ApiResponse<Vec<ProductSupplyResponse>>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_all_product_supplies(
    Extension(service): Extension<DynProductSupplyQueryService>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.get_all_product_supplies().await.at_path(&uri)
}

#[utoipa::path(
    get,
    path = "/product-supply/{id}",
    tag = "Product supply",
    params(("id" = i64, Path, description = "Product supply ID")),
    responses(
        (status = 200, description = "Product supply details", body = ApiResponse<ProductSupplyResponse>),
        (status = 404, description = "Product supply not found", body = ErrorResponse)
    )
)]
pub async fn get_product_supply(
    Extension(service): Extension<DynProductSupplyQueryService>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.get_product_supply_by_id(id).await.at_path(&uri)
}

#[utoipa::path(
    post,
    path = "/product-supply/add",
    tag = "Product supply",
    request_body = CreateProductSupplyRequest,
    responses(
        (status = 201, description = "Product supply recorded, product marked in stock", body = ApiResponse<ProductSupplyResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Referenced product not found", body = ErrorResponse)
    )
)]
pub async fn add_product_supply(
    Extension(service): Extension<DynProductSupplyCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<CreateProductSupplyRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.add_product_supply(&body).await.at_path(&uri)
}

#[utoipa::path(
    put,
    path = "/product-supply/update",
    tag = "Product supply",
    request_body = UpdateProductSupplyRequest,
    responses(
        (status = 200, description = "Product supply updated", body = ApiResponse<ProductSupplyResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product supply or product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_supply(
    Extension(service): Extension<DynProductSupplyCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<UpdateProductSupplyRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.update_product_supply(&body).await.at_path(&uri)
}

#[utoipa::path(
    delete,
    path = "/product-supply/delete/{id}",
    tag = "Product supply",
    params(("id" = i64, Path, description = "Product supply ID")),
    responses(
        (status = 200, description = "Product supply deleted"),
        (status = 404, description = "Product supply not found", body = ErrorResponse)
    )
)]
pub async fn delete_product_supply(
    Extension(service): Extension<DynProductSupplyCommandService>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.delete_product_supply(id).await.at_path(&uri)
}

pub fn product_supply_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product-supply/all", get(get_all_product_supplies))
        .route("/product-supply/{id}", get(get_product_supply))
        .route("/product-supply/add", post(add_product_supply))
        .route("/product-supply/update", put(update_product_supply))
        .route("/product-supply/delete/{id}", delete(delete_product_supply))
        .layer(Extension(app_state.di_container.product_supply_query.clone()))
        .layer(Extension(app_state.di_container.product_supply_command.clone()))
}
