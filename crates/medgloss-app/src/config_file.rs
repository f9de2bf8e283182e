use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use medgloss_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Read a JSON config file. Missing keys fall back to defaults.
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

/// `--config` path, else `./config.json` when present, else env defaults
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return load_config_file(&local);
    }

    Ok(Config::new())
}
