use std::env;

use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    env::var("MEDGLOSS_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

fn default_api_base_url() -> Option<String> {
    env::var("MEDGLOSS_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

fn default_timeout_seconds() -> u64 {
    env::var("TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Address the `serve` command listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// When set, lookups go through a running MedGloss server instead of
    /// calling the providers directly
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Option<String>,
    /// Per request timeout for every outbound HTTP call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
