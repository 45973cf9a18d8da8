use nutri_auth::{AccountRegistrar, PasswordHasher, RequestRateLimiter};
use nutri_core::{IdentityStore, ProfileLifecycle};
use nutri_db::IdentityRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Everything durable lives in the pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub profiles: ProfileLifecycle,
    pub registrar: AccountRegistrar,
    /// None when rate limiting is disabled
    pub auth_rate_limiter: Option<RequestRateLimiter>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        hasher: PasswordHasher,
        auth_rate_limiter: Option<RequestRateLimiter>,
    ) -> Self {
        let store: Arc<dyn IdentityStore> = Arc::new(IdentityRepository::new(pool.clone()));

        Self {
            pool,
            profiles: ProfileLifecycle::new(Arc::clone(&store)),
            registrar: AccountRegistrar::new(store, hasher),
            auth_rate_limiter,
        }
    }
}
