//! Host configuration parsed from environment variables.
//!
//! Recognized:
//! - `PORT`: listen port, default 3000.
//! - `BIND_ADDR`: listen address, default `0.0.0.0`.
//! - `RUST_LOG`: tracing filter, default `info` (read in `main`).
//!
//! The Leptos site layout (`site-root`, `pkg` dir) comes from
//! `[package.metadata.leptos]` / `LEPTOS_*` variables via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("BIND_ADDR").ok().as_deref())
    }

    pub(crate) fn from_values(port: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match bind_addr.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
