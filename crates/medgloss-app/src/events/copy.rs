use kanal::AsyncSender;
use medgloss_io::clipboard::CopyMethod;
use medgloss_types::{AppEvent, Notice};

pub const COPIED: &str = "Copied ✅";

/// Copy `text` with `copy` and tell the UI how it went
pub async fn handle_copy<F>(
    copy: F,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    F: FnOnce(&str) -> anyhow::Result<CopyMethod>,
{
    let notice = match copy(text) {
        Ok(method) => {
            tracing::debug!("[COPY] {} chars via {:?}", text.chars().count(), method);
            Notice::Info(COPIED.to_string())
        }
        Err(e) => {
            tracing::error!("[COPY] failed: {:#}", e);
            Notice::Error(format!("Copy failed: {e}"))
        }
    };

    app_to_ui_tx.send(AppEvent::Notify(notice)).await?;
    Ok(())
}
