//! Listener configuration.
//!
//! The service binds `[::]:8080`, which accepts IPv4 clients too on
//! dual-stack hosts. Hosts without IPv6 fall back to `0.0.0.0`. `PORT` in
//! the environment overrides the port; nothing else is configurable.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv6Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_port(std::env::var("PORT").ok().as_deref())
    }

    /// Default config, with the port replaced when `port` is given.
    pub fn with_port(port: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = port {
            let port = value.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                value: value.to_string(),
                source,
            })?;
            config.addr.set_port(port);
        }
        Ok(config)
    }

    /// IPv4 wildcard on the same port, for when the IPv6 wildcard can't bind.
    pub fn ipv4_fallback(&self) -> Option<SocketAddr> {
        (self.addr.ip() == IpAddr::V6(Ipv6Addr::UNSPECIFIED))
            .then(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.addr.port())))
    }

    /// Browser-friendly URL of the collection endpoint.
    pub fn todos_url(&self) -> String {
        format!("http://localhost:{}/todos", self.addr.port())
    }
}
