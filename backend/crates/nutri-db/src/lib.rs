pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, PoolSettings, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
