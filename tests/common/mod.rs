#![allow(dead_code)]

pub mod mock_backend;

use hrdesk::config::Config;
use hrdesk::gateway::Gateway;

/// Gateway pointed at an arbitrary base URL.
pub fn gateway_for(base_url: &str) -> Gateway {
    Gateway::new(&Config {
        base_url: base_url.to_string(),
        ..Config::default()
    })
}

/// Gateway pointed at a port nothing listens on, for transport failures.
pub fn dead_gateway() -> Gateway {
    gateway_for("http://127.0.0.1:9")
}
