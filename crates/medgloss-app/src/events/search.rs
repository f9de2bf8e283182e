use kanal::AsyncSender;
use medgloss_formatter::FormatError;
use medgloss_types::{AppEvent, ImageResult, TermRecord};

use crate::state::AppState;

/// Formatter first, then the image for the term the formatter settled on.
///
/// The record goes to the UI before the image lookup starts so the fields
/// show up even when the image is slow.
pub async fn handle_search(
    state: &AppState,
    search_id: u64,
    query: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let record = match state.formatter.format(query).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("[SEARCH] #{} failed: {}", search_id, e);
            app_to_ui_tx
                .send(AppEvent::SearchFailed {
                    search_id,
                    message: e.to_string(),
                })
                .await?;
            return Ok(());
        }
    };

    let term = record.term.clone();
    app_to_ui_tx
        .send(AppEvent::ShowRecord { search_id, record })
        .await?;

    let image = state.images.lookup(&term).await;
    tracing::debug!("[SEARCH] #{} image: '{}'", search_id, image.image_url);
    app_to_ui_tx
        .send(AppEvent::ShowImage { search_id, image })
        .await?;

    Ok(())
}

/// Both lookups in one call, for callers without a UI
pub async fn lookup_term(
    state: &AppState,
    query: &str,
) -> Result<(TermRecord, ImageResult), FormatError> {
    let record = state.formatter.format(query).await?;
    let image = state.images.lookup(&record.term).await;
    Ok((record, image))
}
