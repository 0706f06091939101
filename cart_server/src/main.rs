use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Startup errors are already logged by the framework layer.
    match cart_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
