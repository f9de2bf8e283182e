use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Pasted terms sometimes carry line breaks
        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Preprocess a raw query, `None` when nothing is left to look up.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = DefaultPreprocessor.process(raw);
    if query.is_empty() { None } else { Some(query) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_queries_are_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t "), None);
        assert_eq!(normalize_query("\r\n"), None);
    }

    #[test]
    fn queries_are_trimmed_and_flattened() {
        assert_eq!(
            normalize_query("  Osteomyelitis \n").as_deref(),
            Some("Osteomyelitis")
        );
        assert_eq!(
            normalize_query("acute\nappendicitis").as_deref(),
            Some("acute appendicitis")
        );
    }

    #[test]
    fn fullwidth_forms_are_folded() {
        assert_eq!(normalize_query("ＡＣＬ").as_deref(), Some("ACL"));
    }
}
