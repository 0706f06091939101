use crate::domain::entities::Credentials;
use crate::domain::ports::CredentialVerifier;

// The demo ships a single built-in account.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

// Verifier backed by one fixed username/password pair.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn demo() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> bool {
        // Exact match: no trimming, case-sensitive.
        credentials.username.as_deref() == Some(self.username.as_str())
            && credentials.password.as_deref() == Some(self.password.as_str())
    }
}
