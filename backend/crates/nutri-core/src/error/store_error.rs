use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failures reported by an [`IdentityStore`](crate::IdentityStore) implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate value for unique key '{key}' {location}")]
    Duplicate {
        key: String,
        location: ErrorLocation,
    },

    #[error("Store backend failure: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate<S: Into<String>>(key: S) -> Self {
        StoreError::Duplicate {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
