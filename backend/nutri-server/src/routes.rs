use crate::api::rate_limit::limit_auth_requests;
use crate::{AppState, create_profile, delete_profile, get_profile, health, login, register};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            limit_auth_requests,
        ));

    Router::new()
        .merge(auth_routes)
        .route(
            "/profile",
            get(get_profile).post(create_profile).delete(delete_profile),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
