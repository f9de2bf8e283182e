mod remote;
mod wikipedia;

pub use remote::RemoteImageLookup;
pub use wikipedia::{WikipediaLookup, encode_title};

use medgloss_types::ImageResult;

/// Resolves a term to an illustrative image.
///
/// Lookups never fail from the caller's point of view: every problem ends up
/// as an empty [`ImageResult`].
#[async_trait::async_trait]
pub trait ImageLookup: Send + Sync {
    async fn lookup(&self, term: &str) -> ImageResult;

    /// Provider name for logs and health output
    fn name(&self) -> String;
}

/// Lookup used when images are turned off in config
pub struct DisabledLookup;

#[async_trait::async_trait]
impl ImageLookup for DisabledLookup {
    async fn lookup(&self, _term: &str) -> ImageResult {
        ImageResult::none()
    }

    fn name(&self) -> String {
        "disabled".to_string()
    }
}

/// Internal failure reasons, logged then collapsed to "no image"
#[derive(Debug, thiserror::Error)]
pub(crate) enum ImageError {
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
