//! Identity repository backed by SQLite.
//!
//! ## Atomicity
//!
//! - `get_or_create` is one `INSERT ... SELECT ... WHERE NOT EXISTS` statement
//!   with `ON CONFLICT DO NOTHING`, so concurrent callers produce one row and
//!   a tombstoned id is never reinserted.
//! - `delete_all_data` runs in a single transaction: dependent rows, the
//!   identity row and the tombstone are committed together or not at all.
//! - `insert` relies on the `UNIQUE(email)` constraint as the final arbiter
//!   between racing registrations.

use crate::{DbError, Result as DbErrorResult};

use nutri_core::{
    DeletionReport, ErrorLocation, Identity, IdentityStore, ProvisionOutcome, StoreResult, UserId,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct IdentityRow {
    id: String,
    email: Option<String>,
    name: Option<String>,
    password_hash: Option<String>,
    created_at: i64,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DbError;

    fn try_from(r: IdentityRow) -> DbErrorResult<Self> {
        Ok(Identity {
            id: UserId::parse(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid id in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: r.email,
            name: r.name,
            password_hash: r.password_hash,
            created_at: DateTime::<Utc>::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

#[derive(Clone)]
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
                SELECT id, email, name, password_hash, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: &UserId) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
                SELECT id, email, name, password_hash, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, name, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.as_str())
        .bind(identity.email.as_deref())
        .bind(identity.name.as_deref())
        .bind(identity.password_hash.as_deref())
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, id: &UserId) -> DbErrorResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(found != 0)
    }

    pub async fn is_tombstoned(&self, id: &UserId) -> DbErrorResult<bool> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM deleted_users WHERE id = ?)")
                .bind(id.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(found != 0)
    }

    pub async fn get_or_create(&self, id: &UserId) -> DbErrorResult<ProvisionOutcome> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (id, created_at)
                SELECT ?, ?
                WHERE NOT EXISTS (SELECT 1 FROM deleted_users WHERE id = ?)
                ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(id.as_str())
        .bind(now)
        .bind(id.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(ProvisionOutcome::Created);
        }

        if self.is_tombstoned(id).await? {
            Ok(ProvisionOutcome::PermanentlyDeleted)
        } else {
            Ok(ProvisionOutcome::AlreadyPresent)
        }
    }

    pub async fn delete_all_data(&self, id: &UserId) -> DbErrorResult<DeletionReport> {
        let mut tx = self.pool.begin().await?;

        let food_logs = sqlx::query("DELETE FROM food_logs WHERE user_id = ?")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let chat_messages = sqlx::query("DELETE FROM chat_messages WHERE user_id = ?")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let preferences = sqlx::query("DELETE FROM user_preferences WHERE user_id = ?")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let identity_deleted = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if identity_deleted {
            sqlx::query(
                r#"
                    INSERT INTO deleted_users (id, deleted_at)
                    VALUES (?, ?)
                    ON CONFLICT(id) DO NOTHING
                "#,
            )
            .bind(id.as_str())
            .bind(Utc::now().timestamp())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(DeletionReport {
            identity_deleted,
            food_logs,
            chat_messages,
            preferences,
        })
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_email(self, email).await?)
    }

    async fn insert(&self, identity: &Identity) -> StoreResult<()> {
        Ok(self.create(identity).await?)
    }

    async fn exists(&self, id: &UserId) -> StoreResult<bool> {
        Ok(IdentityRepository::exists(self, id).await?)
    }

    async fn get_or_create(&self, id: &UserId) -> StoreResult<ProvisionOutcome> {
        Ok(IdentityRepository::get_or_create(self, id).await?)
    }

    async fn delete_all_data(&self, id: &UserId) -> StoreResult<DeletionReport> {
        Ok(IdentityRepository::delete_all_data(self, id).await?)
    }
}
