use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;
use crate::interface_adapters::protocol::{LoginRequest, MessageResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::login::LoginUseCase;
use axum::{Json, extract::State, http::StatusCode};

pub const SERVICE_STATUS: &str = "Auth Service Running";
const LOGIN_SUCCESS: &str = "Login successful";

// Liveness payload for the root path.
pub async fn status() -> Json<MessageResponse> {
    Json(MessageResponse::new(SERVICE_STATUS))
}

// Handler for checking a username/password pair.
#[tracing::instrument(
    name = "login",
    skip_all,
    fields(username = ?payload.username)
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let credentials = Credentials::from(payload);
    let use_case = LoginUseCase {
        verifier: state.verifier.as_ref(),
    };

    use_case.execute(&credentials).map_err(|err| {
        tracing::warn!(error = ?err, "login rejected");
        map_auth_error(err)
    })?;

    tracing::info!("login accepted");
    Ok(Json(MessageResponse::new(LOGIN_SUCCESS)))
}

fn map_auth_error(err: AuthError) -> (StatusCode, Json<MessageResponse>) {
    match err {
        AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new("Unauthorized")),
        ),
    }
}
