#![allow(dead_code)]

//! Test infrastructure for nutri-server API tests

use nutri_auth::{PasswordHasher, RateLimitConfig, RequestRateLimiter};
use nutri_server::AppState;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    nutri_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState with the cheapest bcrypt cost and no rate limiting
pub async fn create_test_app_state() -> AppState {
    AppState::new(
        create_test_pool().await,
        PasswordHasher::new(4 /* bcrypt minimum cost; bcrypt::MIN_COST is private */),
        None,
    )
}

/// AppState whose auth endpoints allow `max_requests` per minute
pub async fn create_rate_limited_app_state(max_requests: u32) -> AppState {
    AppState::new(
        create_test_pool().await,
        PasswordHasher::new(4 /* bcrypt minimum cost; bcrypt::MIN_COST is private */),
        Some(RequestRateLimiter::new(RateLimitConfig {
            max_requests,
            window_secs: 60,
        })),
    )
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Tag a request with the peer address the server would record
pub fn from_client(mut request: Request<Body>, addr: &str) -> Request<Body> {
    let addr: SocketAddr = addr.parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Attach a food log to `user_id`
pub async fn create_test_food_log(pool: &SqlitePool, user_id: &str) {
    sqlx::query(
        r#"
            INSERT INTO food_logs (id, user_id, food_name, calories, logged_at)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(format!("log-{}-{}", user_id, chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0)))
    .bind(user_id)
    .bind("Oatmeal")
    .bind(150.0_f64)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test food log");
}

pub async fn count_food_logs(pool: &SqlitePool, user_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM food_logs WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count food logs")
}
