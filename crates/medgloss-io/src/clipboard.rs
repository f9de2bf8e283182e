use std::io::Write;

use anyhow::Context;
use arboard::Clipboard;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// How the text finally reached the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    System,
    Terminal,
}

/// Clipboard handle kept alive for the whole session.
///
/// On X11 the copied text is served by the owning `Clipboard`, so dropping
/// it right after a copy would lose the contents.
#[derive(Default)]
pub struct ClipboardWriter {
    system: Option<Clipboard>,
}

impl ClipboardWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy text with the system clipboard, falling back to an OSC 52 escape
    /// sequence written to the terminal.
    pub fn copy_text(&mut self, text: &str) -> Result<CopyMethod, anyhow::Error> {
        match self.copy_system(text) {
            Ok(()) => Ok(CopyMethod::System),
            Err(e) => {
                tracing::warn!("System clipboard unavailable, using terminal fallback: {e:#}");
                self.system = None;
                let mut stdout = std::io::stdout().lock();
                copy_osc52(text, &mut stdout)?;
                Ok(CopyMethod::Terminal)
            }
        }
    }

    fn copy_system(&mut self, text: &str) -> Result<(), anyhow::Error> {
        if self.system.is_none() {
            self.system = Some(Clipboard::new().context("Failed to open clipboard")?);
        }
        let Some(clipboard) = self.system.as_mut() else {
            anyhow::bail!("Clipboard not initialized");
        };
        clipboard
            .set_text(text.to_owned())
            .context("Failed to write clipboard")?;
        Ok(())
    }
}

/// OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub fn copy_osc52<W: Write>(text: &str, out: &mut W) -> Result<(), anyhow::Error> {
    out.write_all(osc52_sequence(text).as_bytes())
        .context("Failed to write terminal clipboard sequence")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_handles_rtl_text() {
        let text = "\u{202B}المعنى بالعربي: التهاب العظم";
        let seq = osc52_sequence(text);
        let payload = seq
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), text.as_bytes());
    }

    #[test]
    fn copy_osc52_writes_sequence() {
        let mut out = Vec::new();
        copy_osc52("abc", &mut out).unwrap();
        assert_eq!(out, osc52_sequence("abc").into_bytes());
    }
}
