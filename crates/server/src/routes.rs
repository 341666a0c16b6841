use axum::{
    routing::{delete, get, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod customers;
pub mod orders;
pub mod products;

/// Shared handler state: the request-scoped connection pool handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let customer_routes = Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/:id",
            get(customers::get).put(customers::update).delete(customers::remove),
        );

    let product_routes = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::remove),
        );

    let order_routes = Router::new()
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", get(orders::get).delete(orders::remove))
        .route("/orders/:order_id/add_product/:product_id", put(orders::add_product))
        .route(
            "/orders/:order_id/remove_product/:product_id",
            delete(orders::remove_product),
        );

    Router::new()
        .route("/health", get(health))
        .merge(customer_routes)
        .merge(product_routes)
        .merge(order_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
