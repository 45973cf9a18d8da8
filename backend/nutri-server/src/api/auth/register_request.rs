use serde::Deserialize;

/// Fields are optional so a missing one surfaces as a validation error
/// naming it.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}
