pub mod deleted_response;
pub mod exists_response;
pub mod ok_response;
#[allow(clippy::module_inception)]
pub mod profile;
pub mod profile_query;
pub mod profile_request;
