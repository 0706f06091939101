// Domain-level errors for auth workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}
