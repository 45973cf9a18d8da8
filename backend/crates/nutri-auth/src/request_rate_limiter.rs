use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-client limiter for the credential endpoints.
///
/// Each client address gets its own bucket: a burst of `max_requests`,
/// refilled one slot every `window_secs / max_requests`. Clones share the
/// buckets.
#[derive(Clone)]
pub struct RequestRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
    config: RateLimitConfig,
}

impl RequestRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            config,
        }
    }

    /// Check if a request from `client` is allowed
    #[track_caller]
    pub fn check(&self, client: IpAddr) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&client)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop buckets of clients that are back at full quota
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_secs.max(1))
    }
}

impl Default for RequestRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
