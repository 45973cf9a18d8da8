use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
