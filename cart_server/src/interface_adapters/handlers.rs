use crate::domain::{Cart, SERVICE_STATUS};
use crate::interface_adapters::protocol::CartResponse;
use axum::{Json, http::StatusCode};

// Handler for the cart contents. Headers and query strings are ignored.
#[tracing::instrument(name = "get_cart")]
pub async fn get_cart() -> Json<CartResponse> {
    let cart = Cart::current();
    tracing::debug!(items = cart.items().len(), "cart served");
    Json(cart.into())
}

// Liveness text for the root path.
pub async fn status() -> &'static str {
    SERVICE_STATUS
}

// A known path with the wrong method is treated like any unknown route.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
