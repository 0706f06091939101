use std::env;
use std::net::{IpAddr, Ipv4Addr};

// Runtime settings shared by all services. Everything has a default so a bare
// `cargo run` reproduces the fixed ports of the demo.

pub const BIND_HOST_VAR: &str = "SHOP_BIND_HOST";
pub const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

// Load .env locally; a missing file is fine.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

pub fn port_from_env(var: &str, default: u16) -> u16 {
    parse_port(var, env::var(var).ok().as_deref(), default)
}

pub fn bind_host() -> IpAddr {
    match env::var(BIND_HOST_VAR) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = BIND_HOST_VAR, value = %raw, "invalid bind host, using default");
            DEFAULT_BIND_HOST
        }),
        Err(_) => DEFAULT_BIND_HOST,
    }
}

fn parse_port(var: &str, raw: Option<&str>, default: u16) -> u16 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(error) => {
            tracing::warn!(var, value = raw, %error, default, "invalid port, using default");
            default
        }
    }
}
