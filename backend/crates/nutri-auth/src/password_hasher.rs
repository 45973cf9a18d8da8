use crate::{AuthError, Result as AuthErrorResult};

/// bcrypt work factor used for every stored password
pub const DEFAULT_COST: u32 = 10;

/// Salted one-way password hashing. Both operations run on tokio's blocking
/// pool. bcrypt reads at most 72 bytes of the password; longer input is
/// truncated, not rejected.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::hashing(format!("hashing task failed: {e}")))?
            .map_err(|e| AuthError::hashing(e.to_string()))
    }

    pub async fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::hashing(format!("verification task failed: {e}")))?
            .map_err(|e| AuthError::hashing(e.to_string()))
    }
}
