use crate::interface_adapters::handlers::{pay, status};
use axum::{Router, routing::any};

// `/pay` accepts any method; everything else falls through to the status text.
pub fn app() -> Router {
    Router::new().route("/pay", any(pay)).fallback(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn body_of(method: &str, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("expected request to build");
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        (
            status,
            String::from_utf8(body.to_vec()).expect("expected utf-8 body"),
        )
    }

    #[tokio::test]
    async fn when_pay_is_posted_then_returns_payment_processed() {
        let (status, body) = body_of("POST", "/pay").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Payment processed");
    }

    #[tokio::test]
    async fn when_pay_is_fetched_with_get_then_returns_payment_processed() {
        let (status, body) = body_of("GET", "/pay").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Payment processed");
    }

    #[tokio::test]
    async fn when_root_is_requested_then_returns_status_text() {
        let (status, body) = body_of("GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Payments Service Running");
    }

    #[tokio::test]
    async fn when_unknown_path_is_requested_then_falls_back_to_status_text() {
        let (status, body) = body_of("PUT", "/refunds/7").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Payments Service Running");
    }

    #[tokio::test]
    async fn when_path_extends_pay_then_falls_back_to_status_text() {
        let (status, body) = body_of("GET", "/pay/extra").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Payments Service Running");
    }
}
