use crate::domain::ports::CredentialVerifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> so tests can swap the verifier implementation.
    pub verifier: Arc<dyn CredentialVerifier>,
}
