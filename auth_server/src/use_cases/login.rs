use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::CredentialVerifier;

// Login use case with the verifier injected.
pub struct LoginUseCase<'a> {
    pub verifier: &'a dyn CredentialVerifier,
}

impl LoginUseCase<'_> {
    pub fn execute(&self, credentials: &Credentials) -> Result<(), AuthError> {
        // A missing half never matches, so the verifier only sees complete pairs.
        if credentials.username.is_none() || credentials.password.is_none() {
            return Err(AuthError::InvalidCredentials);
        }

        if !self.verifier.verify(credentials) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(())
    }
}
