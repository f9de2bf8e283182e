
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medgloss_config::Config;
use medgloss_formatter::{FormatError, Formatter, ProviderMetadata};
use medgloss_image::ImageLookup;
use medgloss_types::{ImageResult, TermRecord};

use crate::state::AppState;

/// Formatter that title-cases the query, or fails when `fail` is set
#[derive(Default)]
pub(crate) struct StubFormatter {
    pub queries: Mutex<Vec<String>>,
    pub fail: bool,
}

#[async_trait]
impl Formatter for StubFormatter {
    async fn format(&self, query: &str) -> Result<TermRecord, FormatError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(FormatError::Upstream("quota exceeded".to_string()));
        }

        let mut chars = query.chars();
        let term = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        Ok(TermRecord {
            term,
            pronunciation: "أوستيوميلايتس".to_string(),
            meaning: "التهاب العظم".to_string(),
            definition: "عدوى بكتيرية في العظم".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            model: None,
            requires_api_key: false,
        }
    }
}

#[derive(Default)]
pub(crate) struct StubImages {
    pub terms: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageLookup for StubImages {
    async fn lookup(&self, term: &str) -> ImageResult {
        self.terms.lock().unwrap().push(term.to_string());
        if term == "Osteomyelitis" {
            ImageResult::new("https://upload.wikimedia.org/osteo.png")
        } else {
            ImageResult::none()
        }
    }

    fn name(&self) -> String {
        "stub".to_string()
    }
}

pub(crate) fn stub_state(
    formatter: Arc<StubFormatter>,
    images: Arc<StubImages>,
) -> Arc<AppState> {
    Arc::new(AppState::with_services(Config::new(), formatter, images))
}
