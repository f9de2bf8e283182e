use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Arabic glossary lookups for medical terms
#[derive(Parser, Debug)]
#[command(name = "medgloss", version, about)]
pub struct Cli {
    /// JSON config file (defaults to ./config.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal lookups (default)
    Tui,
    /// Serve the term and image endpoints over HTTP
    Serve {
        /// Listen address, overrides config
        #[arg(long)]
        bind: Option<String>,
    },
    /// Look up one term and print its export text
    Lookup {
        term: String,
        /// Also copy the export text to the clipboard
        #[arg(long)]
        copy: bool,
    },
}
