use crate::interface_adapters::handlers::{not_found, welcome};
use axum::{Router, routing::get};

pub fn app() -> Router {
    Router::new()
        .route("/", get(welcome))
        .method_not_allowed_fallback(not_found)
}
