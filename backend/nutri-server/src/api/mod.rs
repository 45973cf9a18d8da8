pub mod auth;
pub mod error;
pub mod profile;
pub mod rate_limit;
