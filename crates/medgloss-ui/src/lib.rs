use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use medgloss_config::Config;
use medgloss_types::{AppEvent, UiEvent};
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::RwLock;

pub mod commands;
pub mod events;
pub mod input;
pub mod render;
pub mod state;

use self::events::{Reaction, handle_app_event, handle_input};
use self::state::UiState;

/// Terminal UI: reads commands from stdin, renders app events to stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (mut state, prompt) = {
        let config = config.read().await;
        (UiState::from_config(&config.ui), config.ui.prompt.clone())
    };

    let lines = input::spawn_stdin_reader();
    let mut stdout = tokio::io::stdout();

    write_lines(&mut stdout, &[commands::HELP.to_string()]).await?;
    write_prompt(&mut stdout, &prompt).await?;

    loop {
        let (reaction, from_input) = tokio::select! {
            line = lines.recv() => match line {
                Ok(line) => (handle_input(&mut state, &line), true),
                Err(_) => {
                    tracing::info!("[UI] stdin closed");
                    let reaction = Reaction {
                        outgoing: vec![AppEvent::UiEvent(UiEvent::Close)],
                        quit: true,
                        ..Reaction::default()
                    };
                    (reaction, true)
                }
            },
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => (handle_app_event(&mut state, event), false),
                Err(e) => {
                    tracing::warn!("[UI] app channel closed: {}", e);
                    break;
                }
            },
        };

        write_lines(&mut stdout, &reaction.output).await?;

        for event in reaction.outgoing {
            ui_to_app_tx.send(event).await?;
        }

        if reaction.quit {
            break;
        }

        if from_input || !reaction.output.is_empty() {
            write_prompt(&mut stdout, &prompt).await?;
        }
    }

    Ok(())
}

async fn write_lines(stdout: &mut Stdout, lines: &[String]) -> anyhow::Result<()> {
    for line in lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

async fn write_prompt(stdout: &mut Stdout, prompt: &str) -> anyhow::Result<()> {
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
