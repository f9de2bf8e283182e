use medgloss_types::{ImageResult, TermRecord};

/// Right-to-left embedding mark placed at the start of every export line
pub const RTL_EMBEDDING: char = '\u{202B}';

pub const TERM_LABEL: &str = "English term";
pub const PRONUNCIATION_LABEL: &str = "Pronunciation (Arabic letters)";
pub const MEANING_LABEL: &str = "المعنى بالعربي";
pub const DEFINITION_LABEL: &str = "التعريف/الشرح (بالعربي)";
pub const IMAGE_LABEL: &str = "Image (URL)";

fn line(label: &str, value: &str) -> String {
    format!("{RTL_EMBEDDING}{label}: {value}")
}

/// Build the clipboard text for a record and its image.
///
/// The four text lines are always present, even with empty values. The image
/// line only appears when there is an image URL.
pub fn build_export_text(record: &TermRecord, image: &ImageResult) -> String {
    let mut lines = vec![
        line(TERM_LABEL, &record.term),
        line(PRONUNCIATION_LABEL, &record.pronunciation),
        line(MEANING_LABEL, &record.meaning),
        line(DEFINITION_LABEL, &record.definition),
    ];

    if !image.is_empty() {
        lines.push(line(IMAGE_LABEL, &image.image_url));
    }

    lines.join("\n")
}
