//! Credentialed account registration and the login gate.

use crate::{AuthError, Credentials, PasswordHasher, Registration, Result as AuthErrorResult};

use nutri_core::{ErrorLocation, Identity, IdentityStore, StoreError, UserId};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error, info, warn};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists";
const GENERIC_STORE_FAILURE: &str = "Account storage is unavailable";

#[derive(Clone)]
pub struct AccountRegistrar {
    store: Arc<dyn IdentityStore>,
    hasher: PasswordHasher,
}

impl AccountRegistrar {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Create a credentialed account. Exactly one identity row is written on
    /// success and none on any failure.
    pub async fn register(&self, registration: Registration) -> AuthErrorResult<UserId> {
        let Registration {
            email,
            password,
            name,
        } = registration;

        debug!("Registration requested for {}", email);

        let existing = self
            .store
            .find_by_email(&email)
            .await
            .map_err(|e| store_failure("find_by_email", &email, e))?;
        if existing.is_some() {
            info!("Registration rejected, email already in use: {}", email);
            return Err(duplicate_email());
        }

        let password_hash = self.hasher.hash(&password).await.map_err(|e| {
            error!("Password hashing failed for {}: {}", email, e);
            e
        })?;

        let identity = Identity::credentialed(email, password_hash, name);

        // A concurrent registration may have won since the lookup above; the
        // unique constraint decides.
        match self.store.insert(&identity).await {
            Ok(()) => {}
            Err(e) if e.is_duplicate() => {
                info!("Registration lost race for email {:?}", identity.email);
                return Err(duplicate_email());
            }
            Err(e) => return Err(store_failure("insert", identity.id.as_str(), e)),
        }

        info!("Registered account {}", identity.id);

        Ok(identity.id)
    }

    /// Check credentials and return the account id. Unknown emails, wrong
    /// passwords, password-less profiles and deleted profiles all fail the
    /// same way.
    pub async fn login(&self, credentials: Credentials) -> AuthErrorResult<UserId> {
        let Credentials { email, password } = credentials;

        let identity = self
            .store
            .find_by_email(&email)
            .await
            .map_err(|e| store_failure("find_by_email", &email, e))?
            .ok_or_else(|| {
                debug!("Login failed, unknown email {}", email);
                AuthError::invalid_credentials()
            })?;

        let Some(password_hash) = identity.password_hash.as_deref() else {
            debug!("Login failed, profile {} has no password", identity.id);
            return Err(AuthError::invalid_credentials());
        };

        if !self.hasher.verify(&password, password_hash).await? {
            debug!("Login failed, wrong password for {}", identity.id);
            return Err(AuthError::invalid_credentials());
        }

        let still_exists = self
            .store
            .exists(&identity.id)
            .await
            .map_err(|e| store_failure("exists", identity.id.as_str(), e))?;
        if !still_exists {
            warn!("Refusing login for deleted profile {}", identity.id);
            return Err(AuthError::invalid_credentials());
        }

        info!("Login succeeded for {}", identity.id);

        Ok(identity.id)
    }
}

#[track_caller]
fn duplicate_email() -> AuthError {
    AuthError::Conflict {
        message: DUPLICATE_EMAIL_MESSAGE.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn store_failure(operation: &'static str, subject: &str, e: StoreError) -> AuthError {
    error!("Account {} failed for {}: {}", operation, subject, e);
    AuthError::Store {
        operation,
        message: GENERIC_STORE_FAILURE.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
