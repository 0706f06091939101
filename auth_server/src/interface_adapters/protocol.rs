use crate::domain::entities::Credentials;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request payload for login. Fields are taken as raw JSON so that missing or
// non-string values reach the use case and fail there as a plain mismatch.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            username: into_text(request.username),
            password: into_text(request.password),
        }
    }
}

// Only JSON strings can ever match; anything else counts as absent.
fn into_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

// Simple message envelope used by every auth response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials_from(body: &str) -> Credentials {
        let request: LoginRequest = serde_json::from_str(body).expect("expected request to parse");
        request.into()
    }

    #[test]
    fn when_fields_are_strings_then_they_are_kept() {
        assert_eq!(
            credentials_from(r#"{"username":"admin","password":"admin"}"#),
            Credentials::new("admin", "admin")
        );
    }

    #[test]
    fn when_username_is_a_number_then_it_becomes_absent() {
        let credentials = credentials_from(r#"{"username":5,"password":"admin"}"#);

        assert_eq!(credentials.username, None);
        assert_eq!(credentials.password.as_deref(), Some("admin"));
    }

    #[test]
    fn when_password_is_null_then_it_becomes_absent() {
        let credentials = credentials_from(r#"{"username":"admin","password":null}"#);

        assert_eq!(credentials.password, None);
    }
}
