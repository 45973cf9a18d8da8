//! Profile lifecycle: existence check, get-or-create, and permanent deletion.
//!
//! ```text
//! ABSENT --get_or_create--> PRESENT --delete--> DELETED (terminal)
//! ```
//!
//! `exists` observes any state. `get_or_create` is a no-op on PRESENT and is
//! refused on DELETED: a deleted id must never come back to life implicitly.

use crate::{
    CoreError, IdentityStore, ProvisionOutcome, Result as CoreErrorResult, StoreError, UserId,
};

use std::sync::Arc;

use log::{debug, error, info};

const GENERIC_STORE_FAILURE: &str = "Profile storage is unavailable";

#[derive(Clone)]
pub struct ProfileLifecycle {
    store: Arc<dyn IdentityStore>,
}

impl ProfileLifecycle {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Whether the profile exists right now. Login flows must refuse to
    /// proceed when this is false.
    pub async fn exists(&self, user_id: &UserId) -> CoreErrorResult<bool> {
        debug!("Checking existence of profile {}", user_id);

        self.store
            .exists(user_id)
            .await
            .map_err(|e| store_failure("exists", user_id, e))
    }

    /// Ensure a profile with exactly this id exists
    pub async fn get_or_create(&self, user_id: &UserId) -> CoreErrorResult<ProvisionOutcome> {
        let outcome = self
            .store
            .get_or_create(user_id)
            .await
            .map_err(|e| store_failure("get_or_create", user_id, e))?;

        match outcome {
            ProvisionOutcome::Created => {
                info!("Created profile {}", user_id);
                Ok(outcome)
            }
            ProvisionOutcome::AlreadyPresent => {
                debug!("Profile {} already exists", user_id);
                Ok(outcome)
            }
            ProvisionOutcome::PermanentlyDeleted => {
                info!("Refused to recreate deleted profile {}", user_id);
                Err(CoreError::conflict(format!(
                    "Profile {} has been permanently deleted",
                    user_id
                )))
            }
        }
    }

    /// Delete the profile and all data it owns. Returns false when there was
    /// nothing to delete, including a repeated call.
    pub async fn delete(&self, user_id: &UserId) -> CoreErrorResult<bool> {
        let report = self
            .store
            .delete_all_data(user_id)
            .await
            .map_err(|e| store_failure("delete_all_data", user_id, e))?;

        if report.identity_deleted {
            info!(
                "Deleted profile {} ({} food logs, {} chat messages, {} preferences)",
                user_id, report.food_logs, report.chat_messages, report.preferences
            );
        } else {
            debug!("Delete requested for unknown profile {}", user_id);
        }

        Ok(report.identity_deleted)
    }
}

#[track_caller]
fn store_failure(operation: &'static str, user_id: &UserId, e: StoreError) -> CoreError {
    error!("Profile {} failed for {}: {}", operation, user_id, e);
    CoreError::store(operation, GENERIC_STORE_FAILURE)
}
