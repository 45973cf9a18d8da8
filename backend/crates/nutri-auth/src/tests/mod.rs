
use crate::{AccountRegistrar, PasswordHasher};

use nutri_db::IdentityRepository;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Cheapest bcrypt cost, keeps the suite fast
pub(crate) fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(4 /* bcrypt minimum cost; bcrypt::MIN_COST is private */)
}

pub(crate) async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    nutri_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) async fn create_test_registrar() -> (IdentityRepository, AccountRegistrar) {
    let repo = IdentityRepository::new(create_test_pool().await);
    let registrar = AccountRegistrar::new(Arc::new(repo.clone()), fast_hasher());
    (repo, registrar)
}
