mod product;
mod product_sale;
mod product_supply;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::{StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    errors::{ErrorResponse, HttpError, ServiceError},
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::product::product_routes;
pub use self::product_sale::product_sale_routes;
pub use self::product_supply::product_supply_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_all_products,
        product::search_products,
        product::get_product,
        product::add_product,
        product::update_product,
        product::delete_product_by_body,
        product::delete_product,

        product_sale::get_all_product_sales,
        product_sale::get_product_sale,
        product_sale::add_product_sale,
        product_sale::update_product_sale,
        product_sale::delete_product_sale,

        product_supply::get_all_product_supplies,
        product_supply::get_product_supply,
        product_supply::add_product_supply,
        product_supply::update_product_supply,
        product_supply::delete_product_supply,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
        (name = "Product sale", description = "Sales; recording one marks the product out of stock"),
        (name = "Product supply", description = "Supplies; recording one marks the product in stock"),
    )
)]
struct ApiDoc;

/// Renders service failures as the error envelope for the request path.
pub(crate) trait AtPath<T> {
    fn at_path(self, uri: &Uri) -> Result<T, ErrorResponse>;
}

impl<T> AtPath<T> for Result<T, ServiceError> {
    fn at_path(self, uri: &Uri) -> Result<T, ErrorResponse> {
        self.map_err(|err| HttpError::from(err).at(uri.path()))
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        return HttpError::Internal(format!("Failed to encode metrics: {e}")).into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

async fn fallback_handler(OriginalUri(uri): OriginalUri) -> ErrorResponse {
    ErrorResponse::new(StatusCode::NOT_FOUND, None).with_path(uri.path())
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(shared_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(product_routes(shared_state.clone()))
            .merge(product_sale_routes(shared_state.clone()))
            .merge(product_supply_routes(shared_state));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .fallback(fallback_handler)
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        info!("👋 Server stopped");
        Ok(())
    }
}
