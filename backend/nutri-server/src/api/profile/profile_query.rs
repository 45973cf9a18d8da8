use serde::Deserialize;

/// Query string of GET /profile
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}
