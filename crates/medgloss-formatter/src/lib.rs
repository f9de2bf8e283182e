mod extract;
mod openai;
mod prompt;
mod remote;

pub use extract::{extract_json_object, normalize_record, parse_model_output};
pub use openai::OpenAiFormatter;
pub use prompt::build_prompt;
pub use remote::RemoteFormatter;

use medgloss_types::TermRecord;

/// Turns a free-text term into a structured gloss
#[async_trait::async_trait]
pub trait Formatter: Send + Sync {
    /// Format a single, already trimmed query. One attempt, no retries.
    async fn format(&self, query: &str) -> Result<TermRecord, FormatError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: Option<String>,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Missing query")]
    EmptyQuery,

    #[error("Missing {0}")]
    MissingCredential(&'static str),

    #[error("{0}")]
    Upstream(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Model did not return JSON")]
    NoJson,

    #[error("Invalid JSON from model: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Coarse classification used by callers that map errors to responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Upstream,
    Parse,
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::EmptyQuery => ErrorKind::Validation,
            FormatError::MissingCredential(_) => ErrorKind::Configuration,
            FormatError::Upstream(_) | FormatError::Network(_) => ErrorKind::Upstream,
            FormatError::NoJson | FormatError::InvalidJson(_) => ErrorKind::Parse,
        }
    }
}
