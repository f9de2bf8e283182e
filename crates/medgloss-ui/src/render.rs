use medgloss_core::export::{
    DEFINITION_LABEL, IMAGE_LABEL, MEANING_LABEL, PRONUNCIATION_LABEL, TERM_LABEL,
};
use medgloss_core::session::{SearchPhase, Session};
use medgloss_types::Notice;

const NO_IMAGE: &str = "لا توجد صورة مناسبة لهذا المصطلح.";

#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        self.paint("1;36", text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }
}

pub fn render_session(session: &Session, style: &Style) -> String {
    let status = match session.phase() {
        SearchPhase::Idle if session.record().term.is_empty() => "Ready".to_string(),
        SearchPhase::Idle => "Ready (showing last result)".to_string(),
        SearchPhase::Searching { .. } => "Searching…".to_string(),
        SearchPhase::Displaying => format!("Result for \"{}\"", session.query().trim()),
    };

    let record = session.record();
    let image = if session.image().is_empty() {
        style.dim(NO_IMAGE)
    } else {
        session.image().image_url.clone()
    };

    [
        style.dim(&format!("── {status} ──")),
        format!("{}: {}", style.label(TERM_LABEL), record.term),
        format!("{}: {}", style.label(PRONUNCIATION_LABEL), record.pronunciation),
        format!("{}: {}", style.label(MEANING_LABEL), record.meaning),
        format!("{}: {}", style.label(DEFINITION_LABEL), record.definition),
        format!("{}: {}", style.label(IMAGE_LABEL), image),
    ]
    .join("\n")
}

pub fn render_notice(notice: &Notice, style: &Style) -> String {
    match notice {
        Notice::Info(msg) => style.paint("32", msg),
        Notice::Error(msg) => style.paint("31", &format!("Error: {msg}")),
    }
}
