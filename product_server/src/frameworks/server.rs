use crate::frameworks::config;
use crate::interface_adapters::routes;
use shop_runtime::server;
use std::io::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub async fn run(listener: TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    tracing::info!(%address, "Product service listening on port {}", address.port());

    server::serve(listener, routes::app()).await
}

pub async fn run_with_config() -> Result<()> {
    shop_runtime::config::load_dotenv();
    shop_runtime::telemetry::init_tracing();

    let address = SocketAddr::new(shop_runtime::config::bind_host(), config::http_port());
    let listener = server::bind(address).await?;

    run(listener).await
}
