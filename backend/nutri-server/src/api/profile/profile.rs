//! Profile REST API handlers
//!
//! All three take a caller-supplied `userId`, validated before the store is
//! touched.

use crate::{
    ApiResult, AppState, DeletedResponse, ExistsResponse, OkResponse, ProfileQuery,
    ProfileRequest,
};

use nutri_core::UserId;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

/// GET /profile?userId=...
pub async fn get_profile(
    State(state): State<AppState>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
) -> ApiResult<Json<ExistsResponse>> {
    let Query(query) = query?;
    let user_id = UserId::parse(query.user_id.as_deref().unwrap_or_default())?;

    let exists = state.profiles.exists(&user_id).await?;

    Ok(Json(ExistsResponse { exists }))
}

/// POST /profile
///
/// Idempotent; a permanently deleted id is refused.
pub async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> ApiResult<Json<OkResponse>> {
    let Json(request) = payload?;
    let user_id = UserId::parse(request.user_id.as_deref().unwrap_or_default())?;

    state.profiles.get_or_create(&user_id).await?;

    Ok(Json(OkResponse { ok: true }))
}

/// DELETE /profile
///
/// Removes the profile and everything it owns.
pub async fn delete_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> ApiResult<Json<DeletedResponse>> {
    let Json(request) = payload?;
    let user_id = UserId::parse(request.user_id.as_deref().unwrap_or_default())?;

    let deleted = state.profiles.delete(&user_id).await?;

    Ok(Json(DeletedResponse { deleted }))
}
