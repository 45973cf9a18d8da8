//! Credential REST API handlers

use crate::{
    ApiResult, AppState, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use nutri_auth::{Credentials, Registration};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;

    let registration = Registration::parse(
        request.email.as_deref(),
        request.password.as_deref(),
        request.name.as_deref(),
    )?;

    let user_id = state.registrar.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user_id: user_id.into_inner(),
        }),
    ))
}

/// POST /auth/login
///
/// Refused for deleted profiles even when the password matches
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    let credentials = Credentials::parse(request.email.as_deref(), request.password.as_deref())?;
    let user_id = state.registrar.login(credentials).await?;

    Ok(Json(LoginResponse {
        success: true,
        user_id: user_id.into_inner(),
    }))
}
