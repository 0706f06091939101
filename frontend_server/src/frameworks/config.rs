use shop_runtime::config;

pub const DEFAULT_HTTP_PORT: u16 = 8080;

pub fn http_port() -> u16 {
    config::port_from_env("FRONTEND_SERVER_PORT", DEFAULT_HTTP_PORT)
}
