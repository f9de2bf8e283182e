use anyhow::Context;
use medgloss_core::export::build_export_text;
use medgloss_core::preprocess::normalize_query;
use medgloss_io::clipboard::ClipboardWriter;

use crate::events::copy::COPIED;
use crate::events::search::lookup_term;
use crate::state::AppState;

/// One-shot lookup: returns the export text for `raw`
pub async fn export_for(state: &AppState, raw: &str) -> anyhow::Result<String> {
    let Some(query) = normalize_query(raw) else {
        anyhow::bail!("Nothing to search for");
    };

    let (record, image) = lookup_term(state, &query)
        .await
        .with_context(|| format!("lookup failed for '{query}'"))?;

    Ok(build_export_text(&record, &image))
}

/// `medgloss lookup TERM [--copy]`
pub async fn run(state: &AppState, raw: &str, copy: bool) -> anyhow::Result<()> {
    let text = export_for(state, raw).await?;
    println!("{text}");

    if copy {
        let method = ClipboardWriter::new()
            .copy_text(&text)
            .context("copy failed")?;
        tracing::debug!("copied via {:?}", method);
        eprintln!("{COPIED}");
    }

    Ok(())
}
