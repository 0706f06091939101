use crate::frameworks::config;
use crate::interface_adapters::credentials::StaticCredentials;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use shop_runtime::server;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run(listener: TcpListener) -> Result<()> {
    let address = listener.local_addr()?;

    let state = AppState {
        verifier: Arc::new(StaticCredentials::demo()),
    };

    tracing::info!(%address, "Auth service listening on port {}", address.port());
    server::serve(listener, app(state)).await
}

pub async fn run_with_config() -> Result<()> {
    shop_runtime::config::load_dotenv();
    shop_runtime::telemetry::init_tracing();

    let address = SocketAddr::new(shop_runtime::config::bind_host(), config::http_port());
    let listener = server::bind(address).await?;

    run(listener).await
}
