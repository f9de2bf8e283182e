use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use medgloss_io::clipboard::ClipboardWriter;
use medgloss_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod copy;
pub mod search;

use copy::handle_copy;
use search::handle_search;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // Kept for the whole session, X11 drops clipboard contents with the owner
    let mut clipboard = ClipboardWriter::new();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        let flow = handle_events(&state, &mut clipboard, &app_to_ui_tx, event).await?;
        if flow.is_break() {
            tracing::info!("[EVENT_LOOP] UI closed, exiting");
            break;
        }
    }

    Ok(())
}

pub(crate) async fn handle_events(
    state: &AppState,
    clipboard: &mut ClipboardWriter,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::UiEvent(UiEvent::Close) => return Ok(ControlFlow::Break(())),
        AppEvent::Search { search_id, query } => {
            tracing::info!("[SEARCH] #{} '{}'", search_id, query);
            handle_search(state, search_id, &query, app_to_ui_tx).await?;
        }
        AppEvent::CopyText(text) => {
            handle_copy(|text| clipboard.copy_text(text), &text, app_to_ui_tx).await?;
        }
        AppEvent::ShowRecord { .. }
        | AppEvent::ShowImage { .. }
        | AppEvent::SearchFailed { .. }
        | AppEvent::Notify(_)
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}
