use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}
