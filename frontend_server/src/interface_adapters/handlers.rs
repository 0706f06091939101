use crate::domain::WELCOME_MESSAGE;
use axum::http::StatusCode;

#[tracing::instrument(name = "welcome")]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

// A known path with the wrong method is treated like any unknown route.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
