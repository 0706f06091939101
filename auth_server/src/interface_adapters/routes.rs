use crate::interface_adapters::handlers::{login, status};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/login", post(login))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapters::credentials::StaticCredentials;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_test_app() -> Router {
        app(AppState {
            verifier: Arc::new(StaticCredentials::demo()),
        })
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("expected request to build")
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    #[tokio::test]
    async fn when_root_is_requested_then_returns_running_message() {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Auth Service Running");
    }

    #[tokio::test]
    async fn when_credentials_are_admin_then_returns_200_and_success_message() {
        let response = build_test_app()
            .oneshot(login_request(r#"{"username":"admin","password":"admin"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Login successful");
    }

    #[tokio::test]
    async fn when_password_is_wrong_then_returns_401_and_unauthorized() {
        let response = build_test_app()
            .oneshot(login_request(r#"{"username":"admin","password":"nope"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn when_payload_is_empty_object_then_returns_401() {
        let response = build_test_app()
            .oneshot(login_request("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn when_username_is_a_number_then_returns_401() {
        let response = build_test_app()
            .oneshot(login_request(r#"{"username":5,"password":"admin"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn when_username_is_an_array_then_returns_401() {
        let response = build_test_app()
            .oneshot(login_request(r#"{"username":["admin"],"password":"admin"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn when_password_is_an_object_then_returns_401() {
        let response = build_test_app()
            .oneshot(login_request(r#"{"username":"admin","password":{"value":"admin"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn when_payload_has_extra_fields_then_they_are_ignored() {
        let response = build_test_app()
            .oneshot(login_request(
                r#"{"username":"admin","password":"admin","remember":true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn when_body_is_not_json_then_returns_client_error() {
        let response = build_test_app()
            .oneshot(login_request("username=admin"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_content_type_is_missing_then_returns_415() {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .body(Body::from(r#"{"username":"admin","password":"admin"}"#))
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn when_login_is_called_with_get_then_returns_405() {
        let request = Request::builder()
            .method("GET")
            .uri("/login")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn when_auth_route_does_not_exist_then_returns_404() {
        let request = Request::builder()
            .method("POST")
            .uri("/logout")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
