pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    profile::{
        deleted_response::DeletedResponse,
        exists_response::ExistsResponse,
        ok_response::OkResponse,
        profile::{create_profile, delete_profile, get_profile},
        profile_query::ProfileQuery,
        profile_request::ProfileRequest,
    },
};
pub use app_state::AppState;
pub use error::ServerError;

pub use crate::routes::build_router;
