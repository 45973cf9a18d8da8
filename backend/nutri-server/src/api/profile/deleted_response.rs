use serde::Serialize;

/// `deleted` is false when there was nothing to delete
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
