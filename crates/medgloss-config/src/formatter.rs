use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable holding the LLM credential. Never read from files.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

fn default_provider() -> String {
    "openai".to_string()
}

fn default_api_url() -> String {
    env::var("OPENAI_API_URL").unwrap_or_else(|_| "https://api.openai.com/v1/responses".to_string())
}

fn default_model() -> String {
    env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string())
}

fn default_structured_output() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FormatterConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Ask the provider for a strict JSON schema instead of free text
    #[serde(default = "default_structured_output")]
    pub structured_output: bool,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self {
            api_key: Self::api_key_from_env(),
            ..Self::default()
        }
    }

    /// Empty values count as missing
    pub fn api_key_from_env() -> Option<String> {
        env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: default_api_url(),
            model: default_model(),
            structured_output: default_structured_output(),
            api_key: None,
        }
    }
}
