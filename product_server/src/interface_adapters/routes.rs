use crate::interface_adapters::handlers::{health, list_products};
use axum::{Router, routing::get};

pub fn app() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/health", get(health))
}
