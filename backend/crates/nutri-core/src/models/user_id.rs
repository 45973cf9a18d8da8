use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

const USER_ID_FIELD: &str = "userId";
const GENERATED_PREFIX: &str = "user_";

/// Opaque, caller-visible identifier of an identity.
///
/// Client-supplied ids are trimmed and must be non-blank. Generated ids are
/// `user_` followed by a UUID v7, which carries a millisecond timestamp and
/// random bits. Only uniqueness and opacity are promised, not the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub const MAX_LEN: usize = 128;

    /// Validate a raw id coming from a request
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CoreError::validation(USER_ID_FIELD, "userId is required"));
        }

        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(CoreError::validation(
                USER_ID_FIELD,
                format!("userId must be at most {} characters", Self::MAX_LEN),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Mint a fresh id for a credentialed account
    pub fn generate() -> Self {
        Self(format!("{GENERATED_PREFIX}{}", Uuid::now_v7().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
