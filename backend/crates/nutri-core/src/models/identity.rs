//! Identity entity - one user or device profile.

use crate::UserId;

use chrono::{DateTime, Utc};

/// A durable record keyed by an opaque id.
///
/// Credentialed accounts carry an email and password hash. Anonymous
/// profiles carry only the id, which doubles as the portable credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    /// Lower-cased, unique when present
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a credentialed account with a freshly generated id
    pub fn credentialed(email: String, password_hash: String, name: Option<String>) -> Self {
        Self {
            id: UserId::generate(),
            email: Some(email),
            name,
            password_hash: Some(password_hash),
            created_at: Utc::now(),
        }
    }

    /// Create a minimal profile with a client-chosen id
    pub fn anonymous(id: UserId) -> Self {
        Self {
            id,
            email: None,
            name: None,
            password_hash: None,
            created_at: Utc::now(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.email.is_some() && self.password_hash.is_some()
    }
}
