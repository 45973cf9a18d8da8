use crate::{
    Result as AuthErrorResult,
    registration::{normalize_email, require_password},
};

/// Validated input of `login`
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[track_caller]
    pub fn parse(email: Option<&str>, password: Option<&str>) -> AuthErrorResult<Self> {
        let email = normalize_email(email)?;

        let password = require_password(password)?;

        Ok(Self { email, password })
    }
}
