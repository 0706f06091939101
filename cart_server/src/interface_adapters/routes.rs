use crate::interface_adapters::handlers::{get_cart, not_found, status};
use axum::{Router, routing::get};

pub fn app() -> Router {
    Router::new()
        .route("/", get(status))
        .route("/cart", get(get_cart))
        .method_not_allowed_fallback(not_found)
}
