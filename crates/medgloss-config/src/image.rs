use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    env::var("WIKIPEDIA_API_URL")
        .unwrap_or_else(|_| "https://en.wikipedia.org/api/rest_v1".to_string())
}

fn default_user_agent() -> String {
    format!("MedGloss/{} (contact: none)", env!("CARGO_PKG_VERSION"))
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImageConfig {
    /// Disabled lookups always yield "no image"
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base of the REST API, `/page/summary/{title}` is appended
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            user_agent: default_user_agent(),
        }
    }
}
