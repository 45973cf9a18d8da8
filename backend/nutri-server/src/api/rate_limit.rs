use crate::{ApiError, ApiResult, AppState};

use std::net::SocketAddr;
use std::panic::Location;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

/// Reject credential requests over the per-client rate before any body is read.
///
/// The client is the peer address recorded by
/// `into_make_service_with_connect_info`.
pub async fn limit_auth_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if let Some(limiter) = &state.auth_rate_limiter {
        let client = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
            .ok_or_else(|| {
                log::error!("Rate limiter enabled but client address is unknown");
                ApiError::Internal {
                    message: "Client address unavailable".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        limiter.check(client)?;
    }

    Ok(next.run(request).await)
}
