use std::net::SocketAddr;

use url::Url;

use crate::{gateway::error::GatewayError, server::error::config::ConfigError};

const DEFAULT_SERVER_URL: &str = "http://localhost:9090";
const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8080";

pub struct GatewayConfig {
    /// Base URL of the booking server requests are forwarded to.
    pub server_url: Url,

    pub gateway_addr: SocketAddr,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        let server_url = std::env::var("SHAREIT_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let gateway_addr =
            std::env::var("GATEWAY_ADDR").unwrap_or_else(|_| DEFAULT_GATEWAY_ADDR.to_string());

        Ok(Self {
            server_url: Url::parse(&server_url)?,
            gateway_addr: gateway_addr
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "GATEWAY_ADDR".to_string(),
                    value: gateway_addr.clone(),
                })?,
        })
    }
}
