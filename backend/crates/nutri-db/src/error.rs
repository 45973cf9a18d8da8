use nutri_core::{ErrorLocation, StoreError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Unique-key violations become `StoreError::Duplicate`, anything else is a
/// backend failure.
impl From<DbError> for StoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match &e {
            DbError::Sqlx {
                source: sqlx::Error::Database(db_err),
                ..
            } if db_err.is_unique_violation() => {
                // SQLite reports "UNIQUE constraint failed: users.email"
                let key = db_err
                    .message()
                    .rsplit(": ")
                    .next()
                    .unwrap_or("unknown")
                    .to_string();
                StoreError::duplicate(key)
            }
            _ => StoreError::backend(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
