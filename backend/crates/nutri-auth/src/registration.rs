use crate::{AuthError, Result as AuthErrorResult};

/// Validated input of `register`
#[derive(Debug, Clone)]
pub struct Registration {
    /// Trimmed and lower-cased
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl Registration {
    /// Validate raw request fields. Nothing touches the store before this
    /// succeeds.
    #[track_caller]
    pub fn parse(
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> AuthErrorResult<Self> {
        let email = normalize_email(email)?;

        let password = require_password(password)?;

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            email,
            password,
            name,
        })
    }
}

/// Trim and lower-case an email. Only a missing or blank value is rejected.
#[track_caller]
pub(crate) fn normalize_email(raw: Option<&str>) -> AuthErrorResult<String> {
    let email = raw.map(str::trim).unwrap_or_default();

    if email.is_empty() {
        return Err(AuthError::validation("email", "Email is required"));
    }

    Ok(email.to_lowercase())
}

/// The password is kept as typed; whitespace-only counts as blank.
#[track_caller]
pub(crate) fn require_password(raw: Option<&str>) -> AuthErrorResult<String> {
    let password = raw.unwrap_or_default();

    if password.trim().is_empty() {
        return Err(AuthError::validation("password", "Password is required"));
    }

    Ok(password.to_string())
}
