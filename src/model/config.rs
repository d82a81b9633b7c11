use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://192.168.0.11:8000";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    /// Backend base URL. Falls back to `DEFAULT_API_BASE_URL` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,

    /// Credential issued by `POST /auth/login`. Never expired locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: 1,
            auth_token: None,
        }
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
