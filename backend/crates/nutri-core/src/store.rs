//! Persistence contract for identities.
//!
//! Both the account registrar and the profile lifecycle talk to storage only
//! through this trait, so either can run against SQLite in production and an
//! in-memory double in tests.

use crate::{DeletionReport, Identity, ProvisionOutcome, StoreResult, UserId};

use async_trait::async_trait;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Look up a credentialed identity by its (already normalized) email
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    /// Persist a new identity. Fails with `StoreError::Duplicate` when the id
    /// or email is already taken.
    async fn insert(&self, identity: &Identity) -> StoreResult<()>;

    async fn exists(&self, id: &UserId) -> StoreResult<bool>;

    /// Insert a minimal identity unless one exists or the id was deleted.
    /// Must be a single atomic step against the store.
    async fn get_or_create(&self, id: &UserId) -> StoreResult<ProvisionOutcome>;

    /// Remove the identity and everything it owns as one unit
    async fn delete_all_data(&self, id: &UserId) -> StoreResult<DeletionReport>;
}
