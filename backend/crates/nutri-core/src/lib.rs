pub mod error;
pub mod models;
pub mod profile;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result, StoreError, StoreResult};
pub use error_location::ErrorLocation;
pub use models::deletion_report::DeletionReport;
pub use models::identity::Identity;
pub use models::provision_outcome::ProvisionOutcome;
pub use models::user_id::UserId;
pub use profile::profile_lifecycle::ProfileLifecycle;
pub use store::IdentityStore;
