use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RATE_LIMIT_ENABLED, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_MAX_REQUESTS, MAX_RATE_LIMIT_WINDOW_SECS,
};

use serde::Deserialize;

/// Limits on the credential endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_RATE_LIMIT_ENABLED,
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_requests == 0 || self.max_requests > MAX_RATE_LIMIT_MAX_REQUESTS {
            return Err(ConfigError::rate_limit(format!(
                "rate_limit.max_requests must be 1-{}, got {}",
                MAX_RATE_LIMIT_MAX_REQUESTS, self.max_requests
            )));
        }

        if self.window_secs == 0 || self.window_secs > MAX_RATE_LIMIT_WINDOW_SECS {
            return Err(ConfigError::rate_limit(format!(
                "rate_limit.window_secs must be 1-{}, got {}",
                MAX_RATE_LIMIT_WINDOW_SECS, self.window_secs
            )));
        }

        Ok(())
    }
}
