use axum::Router;
use std::io::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

// Bind the service listener, logging the address on failure.
pub async fn bind(address: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(address).await.inspect_err(|e| {
        tracing::error!(%address, error = %e, "failed to bind");
    })
}

// Serve the router with per-request tracing until the listener fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let app = app.layer(TraceLayer::new_for_http());

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}
