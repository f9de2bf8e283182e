use std::sync::Arc;

use medgloss_config::Config;
use medgloss_formatter::Formatter;
use medgloss_image::ImageLookup;
use tokio::sync::RwLock;

use crate::services::{build_formatter, build_images};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub formatter: Arc<dyn Formatter>,
    pub images: Arc<dyn ImageLookup>,
}

impl AppState {
    /// `allow_remote` lets the services delegate to `network.api_base_url`.
    /// The server itself passes `false` so it never calls back into itself.
    pub fn from_config(config: Config, allow_remote: bool) -> anyhow::Result<Self> {
        let formatter = build_formatter(&config, allow_remote)?;
        let images = build_images(&config, allow_remote)?;

        tracing::info!(
            formatter = %formatter.metadata().name,
            images = %images.name(),
            "services ready"
        );

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            formatter,
            images,
        })
    }

    #[cfg(test)]
    pub fn with_services(
        config: Config,
        formatter: Arc<dyn Formatter>,
        images: Arc<dyn ImageLookup>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            formatter,
            images,
        }
    }
}
