use shop_runtime::config;

pub const DEFAULT_HTTP_PORT: u16 = 5000;

pub fn http_port() -> u16 {
    config::port_from_env("AUTH_SERVER_PORT", DEFAULT_HTTP_PORT)
}
