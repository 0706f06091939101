use shop_runtime::config;

// Shares the frontend's default; each service normally runs in its own pod.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

pub fn http_port() -> u16 {
    config::port_from_env("PRODUCT_SERVER_PORT", DEFAULT_HTTP_PORT)
}
