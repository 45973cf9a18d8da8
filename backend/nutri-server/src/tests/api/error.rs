use crate::ApiError;

use nutri_auth::AuthError;
use nutri_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "userId is required".into(),
        field: Some("userId".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "userId is required");
    assert_eq!(json["field"], "userId");
}

#[tokio::test]
async fn test_conflict_returns_400_without_field() {
    let error = ApiError::Conflict {
        message: "User with this email already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Profile storage is unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "Profile storage is unavailable");
}

#[test]
fn test_core_store_error_converts_to_internal_with_client_message() {
    let error: ApiError = CoreError::store("exists", "Profile storage is unavailable").into();

    match error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Profile storage is unavailable");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_core_conflict_converts_to_conflict() {
    let error: ApiError = CoreError::conflict("Profile dev-1 has been permanently deleted").into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(error, ApiError::Conflict { .. }));
}

#[test]
fn test_invalid_credentials_converts_to_401() {
    let error: ApiError = AuthError::invalid_credentials().into();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_rate_limit_converts_to_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn test_hashing_error_hides_details() {
    let error: ApiError = AuthError::hashing("bcrypt exploded").into();

    match error {
        ApiError::Internal { message, .. } => assert!(!message.contains("bcrypt")),
        other => panic!("Expected Internal, got {:?}", other),
    }
}
