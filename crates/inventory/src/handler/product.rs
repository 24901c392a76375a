use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{
            CreateProductRequest, DeleteProductRequest, SearchProductsRequest,
            UpdateProductRequest,
        },
        response::ProductResponse,
    },
    handler::AtPath,
    middleware::validate::{IdPath, QueryParams, ValidatedJson},
    state::AppState,
};
use axum::{
    extract::{Extension, OriginalUri},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    domain::responses::ApiResponse,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/product/all",
    tag = "Product",
    responses(
        (status = 200, description = "All products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_all_products(
    Extension(service): Extension<DynProductQueryService>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.get_all_products().await.at_path(&uri)
}

#[utoipa::path(
    get,
    path = "/product/search",
    tag = "Product",
    params(SearchProductsRequest),
    responses(
        (status = 200, description = "Matching products, paged when page or size is given", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Invalid filter or sort", body = ErrorResponse)
    )
)]
pub async fn search_products(
    Extension(service): Extension<DynProductQueryService>,
    OriginalUri(uri): OriginalUri,
    QueryParams(params): QueryParams<SearchProductsRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.search_products(&params).await.at_path(&uri)
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.get_product_by_id(id).await.at_path(&uri)
}

#[utoipa::path(
    post,
    path = "/product/add",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn add_product(
    Extension(service): Extension<DynProductCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.add_product(&body).await.at_path(&uri)
}

#[utoipa::path(
    put,
    path = "/product/update",
    tag = "Product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.update_product(&body).await.at_path(&uri)
}

#[utoipa::path(
    delete,
    path = "/product/delete",
    tag = "Product",
    request_body = DeleteProductRequest,
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 409, description = "Product still referenced by sales or supplies", body = ErrorResponse)
    )
)]
pub async fn delete_product_by_body(
    Extension(service): Extension<DynProductCommandService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<DeleteProductRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let id = body
        .id
        .ok_or_else(|| HttpError::BadRequest("id: Product id is mandatory".into()).at(uri.path()))?;

    service.delete_product(id).await.at_path(&uri)
}

#[utoipa::path(
    delete,
    path = "/product/delete/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 409, description = "Product still referenced by sales or supplies", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    OriginalUri(uri): OriginalUri,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ErrorResponse> {
    service.delete_product(id).await.at_path(&uri)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product/all", get(get_all_products))
        .route("/product/search", get(search_products))
        .route("/product/{id}", get(get_product))
        .route("/product/add", post(add_product))
        .route("/product/update", put(update_product))
        .route("/product/delete", delete(delete_product_by_body))
        .route("/product/delete/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
