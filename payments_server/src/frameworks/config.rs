use shop_runtime::config;

pub const DEFAULT_HTTP_PORT: u16 = 8081;

pub fn http_port() -> u16 {
    config::port_from_env("PAYMENTS_SERVER_PORT", DEFAULT_HTTP_PORT)
}
