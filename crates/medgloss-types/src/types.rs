use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// UI -> app: run a lookup for an already validated query
    Search {
        search_id: u64,
        query: String,
    },
    /// App -> UI: formatter succeeded, image lookup still pending
    ShowRecord {
        search_id: u64,
        record: TermRecord,
    },
    /// App -> UI: image lookup finished (possibly with no image)
    ShowImage {
        search_id: u64,
        image: ImageResult,
    },
    /// App -> UI: formatter failed, nothing to display
    SearchFailed {
        search_id: u64,
        message: String,
    },
    /// UI -> app: put the export text on the clipboard
    CopyText(String),
    /// App -> UI: short acknowledgement or warning for the user
    Notify(Notice),
    BackendReady,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Structured gloss for one looked up term.
///
/// The wire names match the formatter endpoint (`pronunciation_ar`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    #[serde(default)]
    pub term: String,
    #[serde(rename = "pronunciation_ar", default)]
    pub pronunciation: String,
    #[serde(rename = "meaning_ar", default)]
    pub meaning: String,
    #[serde(rename = "definition_ar", default)]
    pub definition: String,
}

/// Image found for a term. An empty `image_url` means no suitable image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    #[serde(default)]
    pub image_url: String,
}

impl ImageResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image_url.is_empty()
    }
}
