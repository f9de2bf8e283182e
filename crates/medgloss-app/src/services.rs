//! Picks formatter and image implementations from config.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use medgloss_config::Config;
use medgloss_formatter::{Formatter, OpenAiFormatter, RemoteFormatter};
use medgloss_image::{DisabledLookup, ImageLookup, RemoteImageLookup, WikipediaLookup};

fn remote_base(config: &Config, allow_remote: bool) -> Option<&str> {
    if !allow_remote {
        return None;
    }
    config
        .network
        .api_base_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

/// Provider needs a key and none is configured
fn missing_credential(formatter: &dyn Formatter, api_key: Option<&str>) -> bool {
    formatter.metadata().requires_api_key && api_key.is_none_or(|key| key.is_empty())
}

pub fn build_formatter(config: &Config, allow_remote: bool) -> anyhow::Result<Arc<dyn Formatter>> {
    let timeout = Duration::from_secs(config.network.timeout_seconds);

    if let Some(base) = remote_base(config, allow_remote) {
        let formatter = RemoteFormatter::new(base)
            .with_timeout(timeout)
            .context("failed to build remote formatter client")?;
        return Ok(Arc::new(formatter));
    }

    let formatter = &config.formatter;
    match formatter.provider.as_str() {
        "openai" => {
            let openai = OpenAiFormatter::new(
                formatter.api_key.clone(),
                formatter.api_url.clone(),
                formatter.model.clone(),
            )
            .with_structured_output(formatter.structured_output)
            .with_timeout(timeout)
            .context("failed to build OpenAI client")?;

            if missing_credential(&openai, formatter.api_key.as_deref()) {
                tracing::warn!(
                    "{} is not set, term lookups will fail until it is",
                    medgloss_config::formatter::API_KEY_ENV
                );
            }

            Ok(Arc::new(openai))
        }
        other => bail!("unknown formatter provider '{other}'"),
    }
}

pub fn build_images(config: &Config, allow_remote: bool) -> anyhow::Result<Arc<dyn ImageLookup>> {
    if !config.image.enabled {
        return Ok(Arc::new(DisabledLookup));
    }

    let timeout = Duration::from_secs(config.network.timeout_seconds);

    if let Some(base) = remote_base(config, allow_remote) {
        let lookup = RemoteImageLookup::new(base)
            .with_timeout(timeout)
            .context("failed to build remote image client")?;
        return Ok(Arc::new(lookup));
    }

    let lookup = WikipediaLookup::new(config.image.api_url.clone(), config.image.user_agent.clone())
        .with_timeout(timeout)
        .context("failed to build Wikipedia client")?;

    Ok(Arc::new(lookup))
}
