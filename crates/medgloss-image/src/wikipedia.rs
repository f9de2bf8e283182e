use std::time::Duration;

use async_trait::async_trait;
use medgloss_types::ImageResult;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::{ImageError, ImageLookup};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a page title for use as a single path segment
pub fn encode_title(term: &str) -> String {
    utf8_percent_encode(term, COMPONENT).to_string()
}

/// Image lookup through the Wikipedia REST summary endpoint
#[derive(Clone)]
pub struct WikipediaLookup {
    client: reqwest::Client,
    api_url: String,
    user_agent: String,
}

impl WikipediaLookup {
    pub fn new(api_url: String, user_agent: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            user_agent,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, reqwest::Error> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn summary_url(&self, term: &str) -> String {
        format!("{}/page/summary/{}", self.api_url, encode_title(term))
    }

    async fn fetch(&self, term: &str) -> Result<ImageResult, ImageError> {
        let response = self
            .client
            .get(self.summary_url(term))
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ImageError::Status(response.status()));
        }

        let summary: PageSummary = response.json().await?;
        Ok(ImageResult::new(summary.image_url()))
    }
}

#[async_trait]
impl ImageLookup for WikipediaLookup {
    async fn lookup(&self, term: &str) -> ImageResult {
        let term = term.trim();
        if term.is_empty() {
            return ImageResult::none();
        }

        match self.fetch(term).await {
            Ok(image) => {
                tracing::debug!("Image for '{}': {:?}", term, image.image_url);
                image
            }
            Err(e) => {
                tracing::debug!("No image for '{}': {}", term, e);
                ImageResult::none()
            }
        }
    }

    fn name(&self) -> String {
        "wikipedia".to_string()
    }
}

#[derive(Deserialize, Default)]
struct PageSummary {
    #[serde(default)]
    thumbnail: Option<ImageSource>,
    #[serde(default)]
    originalimage: Option<ImageSource>,
}

#[derive(Deserialize)]
struct ImageSource {
    #[serde(default)]
    source: Option<String>,
}

impl ImageSource {
    fn url(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

impl PageSummary {
    /// Thumbnail first, then the original image
    fn image_url(&self) -> String {
        self.thumbnail
            .as_ref()
            .and_then(ImageSource::url)
            .or_else(|| self.originalimage.as_ref().and_then(ImageSource::url))
            .unwrap_or_default()
            .to_string()
    }
}
