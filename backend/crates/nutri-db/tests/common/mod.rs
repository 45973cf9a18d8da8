#![allow(dead_code)]

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    nutri_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a food log owned by `user_id`
pub async fn create_test_food_log(pool: &SqlitePool, user_id: &str, food_name: &str) {
    sqlx::query(
        r#"
            INSERT INTO food_logs (id, user_id, food_name, calories, logged_at)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(food_name)
    .bind(250.0_f64)
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test food log");
}

/// Inserts a chat message owned by `user_id`
pub async fn create_test_chat_message(pool: &SqlitePool, user_id: &str, role: &str) {
    sqlx::query(
        "INSERT INTO chat_messages (id, user_id, role, content, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(role)
    .bind("How much protein is in an egg?")
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test chat message");
}

/// Inserts a preference owned by `user_id`
pub async fn create_test_preference(pool: &SqlitePool, user_id: &str, key: &str, value: &str) {
    sqlx::query(
        "INSERT INTO user_preferences (user_id, key, value, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(key)
    .bind(value)
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test preference");
}

/// Counts rows in `table` owned by `user_id`
pub async fn count_owned_rows(pool: &SqlitePool, table: &str, user_id: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE user_id = ?"))
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
