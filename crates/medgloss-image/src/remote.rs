use std::time::Duration;

use async_trait::async_trait;
use medgloss_types::ImageResult;

use crate::{ImageError, ImageLookup};

/// Image lookup through a running server's `GET /api/image`
#[derive(Clone)]
pub struct RemoteImageLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteImageLookup {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/image", base_url.trim_end_matches('/')),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, reqwest::Error> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    async fn fetch(&self, term: &str) -> Result<ImageResult, ImageError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("term", term)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ImageError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ImageLookup for RemoteImageLookup {
    async fn lookup(&self, term: &str) -> ImageResult {
        let term = term.trim();
        if term.is_empty() {
            return ImageResult::none();
        }

        self.fetch(term).await.unwrap_or_else(|e| {
            tracing::debug!("Image endpoint failed for '{}': {}", term, e);
            ImageResult::none()
        })
    }

    fn name(&self) -> String {
        format!("remote ({})", self.endpoint)
    }
}
