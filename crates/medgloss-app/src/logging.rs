//! Logging initialisation via tracing-subscriber.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;

/// Level the terminal UI falls back to, so info logs stay off the prompt
const TUI_LEVEL: &str = "warn";

/// `--log-level` wins. The TUI shares its terminal with stderr and drops to
/// warnings, other commands use the configured level.
pub fn effective_level(command: &Command, cli_level: Option<String>, configured: &str) -> String {
    match (cli_level, command) {
        (Some(level), _) => level,
        (None, Command::Tui) => TUI_LEVEL.to_string(),
        (None, _) => configured.to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level`.
///
/// Logs go to stderr so stdout stays free for the terminal UI and for
/// `lookup` output.
pub fn init(level: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to set subscriber: {e}"))
}
