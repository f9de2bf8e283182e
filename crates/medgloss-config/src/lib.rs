use std::env;

use serde::{Deserialize, Serialize};

use self::formatter::FormatterConfig;
use self::image::ImageConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod formatter;
pub mod image;
pub mod network;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub formatter: FormatterConfig,
    pub image: ImageConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,

    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let log_level = env::var("MEDGLOSS_LOG").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("MEDGLOSS_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            formatter: FormatterConfig::new(),
            image: ImageConfig::default(),
            network: NetworkConfig::default(),
            ui: UiConfig::default(),

            log_level,
            log_json,
        }
    }

    /// Re-read secrets from the environment. Config files never carry them.
    pub fn load_credentials(&mut self) {
        self.formatter.api_key = FormatterConfig::api_key_from_env();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
