use serde::Deserialize;

/// Body of POST and DELETE /profile
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}
