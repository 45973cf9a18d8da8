use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_PORT,
    MAX_CONCURRENT_REQUESTS_LIMIT, MIN_PORT,
};

use std::net::{IpAddr, SocketAddr};
use std::ops::RangeInclusive;

use serde::Deserialize;

const CONCURRENT_REQUESTS_RANGE: RangeInclusive<usize> = 1..=MAX_CONCURRENT_REQUESTS_LIMIT;

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to listen on
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
    /// Requests served at once; the rest wait
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.socket_addr()?;

        if (1..MIN_PORT).contains(&self.port) {
            return Err(ConfigError::server(format!(
                "server.port {} is privileged; use 0 or {}+",
                self.port, MIN_PORT
            )));
        }

        if !CONCURRENT_REQUESTS_RANGE.contains(&self.max_concurrent_requests) {
            return Err(ConfigError::server(format!(
                "server.max_concurrent_requests must be within {:?}, got {}",
                CONCURRENT_REQUESTS_RANGE, self.max_concurrent_requests
            )));
        }

        Ok(())
    }

    /// Parsed listen address; `host` must be a literal IP
    pub fn socket_addr(&self) -> ConfigErrorResult<SocketAddr> {
        let ip: IpAddr = self.host.trim().parse().map_err(|_| {
            ConfigError::server(format!(
                "server.host must be an IP address, got '{}'",
                self.host
            ))
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
