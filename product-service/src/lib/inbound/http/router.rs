use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::delete_product::delete_product;
use super::handlers::list_products::list_products;
use super::handlers::search_products::search_products;
use super::handlers::update_product::update_product;
use crate::domain::product::service::ProductService;
use crate::outbound::repositories::product::PostgresProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<PostgresProductRepository>>,
}

pub fn create_router(product_service: Arc<ProductService<PostgresProductRepository>>) -> Router {
    let state = AppState { product_service };

    let routes = Router::new()
        .route("/api/products", post(create_product))
        .route("/api/products", get(list_products))
        .route("/api/products/:product_id", put(update_product))
        .route("/api/products/:product_id", delete(delete_product))
        .route("/api/products/search/:name", get(search_products));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
