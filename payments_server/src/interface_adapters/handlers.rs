use crate::domain::{PAYMENT_PROCESSED, SERVICE_STATUS};
use axum::http::Method;

#[tracing::instrument(name = "pay")]
pub async fn pay(method: Method) -> &'static str {
    tracing::info!("payment acknowledged");
    PAYMENT_PROCESSED
}

// Answers every path that has no dedicated route.
pub async fn status() -> &'static str {
    SERVICE_STATUS
}
