use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use medgloss_config::Config;
use medgloss_server::ApiState;
use tokio_util::sync::CancellationToken;

mod cli;
mod config_file;
mod controller;
mod events;
mod logging;
mod lookup;
mod services;
mod state;
#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = config_file::load_config(cli.config.as_deref())?;
    config.load_credentials();

    let command = cli.command.unwrap_or(Command::Tui);
    config.log_level = logging::effective_level(&command, cli.log_level, &config.log_level);

    logging::init(&config.log_level, config.log_json)?;

    match command {
        Command::Tui => run_tui(config).await,
        Command::Serve { bind } => run_server(config, bind).await,
        Command::Lookup { term, copy } => {
            let state = AppState::from_config(config, true)?;
            lookup::run(&state, &term, copy).await
        }
    }
}

async fn run_tui(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config, true)?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task finished"),
                Ok(Err(e)) => tracing::error!("task exited: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
    while tasks.join_next().await.is_some() {}

    Ok(())
}

async fn run_server(config: Config, bind: Option<String>) -> anyhow::Result<()> {
    let bind = bind.unwrap_or_else(|| config.network.bind_addr.clone());
    let state = AppState::from_config(config, false)?;
    let api = ApiState {
        formatter: state.formatter.clone(),
        images: state.images.clone(),
    };

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown requested");
                signal.cancel();
            }
            Err(e) => tracing::warn!("failed to listen for ctrl+c: {e}"),
        }
    });

    medgloss_server::serve(&bind, api, shutdown).await
}
