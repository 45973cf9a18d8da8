mod store_error;

pub use store_error::{StoreError, StoreResult};

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error during {operation}: {message} {location}")]
    Store {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named request field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a conflict error
    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        CoreError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a store error. The message is what clients get to see.
    #[track_caller]
    pub fn store<S: Into<String>>(operation: &'static str, message: S) -> Self {
        CoreError::Store {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
