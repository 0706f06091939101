use crate::domain::entities::Credentials;

// Port for checking presented credentials against the known account.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> bool;
}
