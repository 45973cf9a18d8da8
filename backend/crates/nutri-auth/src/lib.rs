pub mod account_registrar;
pub mod credentials;
pub mod error;
pub mod password_hasher;
pub mod rate_limit_config;
pub mod registration;
pub mod request_rate_limiter;

pub use account_registrar::AccountRegistrar;
pub use credentials::Credentials;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use rate_limit_config::RateLimitConfig;
pub use registration::Registration;
pub use request_rate_limiter::RequestRateLimiter;

#[cfg(test)]
mod tests;
