use crate::domain::{Catalog, HEALTH_MESSAGE};
use axum::Json;

// The catalog is serialized as a bare JSON array of names.
#[tracing::instrument(name = "list_products")]
pub async fn list_products() -> Json<Vec<String>> {
    let catalog = Catalog::current();
    tracing::debug!(products = catalog.products().len(), "catalog served");
    Json(catalog.into_products())
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
