use std::time::Duration;

use async_trait::async_trait;
use medgloss_types::TermRecord;
use serde::{Deserialize, Serialize};

use crate::{FormatError, Formatter, ProviderMetadata};

/// Formatter that delegates to a running server's `POST /api/term`
#[derive(Clone)]
pub struct RemoteFormatter {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteFormatter {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/term", base_url.trim_end_matches('/')),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, FormatError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }
}

#[derive(Serialize)]
struct TermRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[async_trait]
impl Formatter for RemoteFormatter {
    async fn format(&self, query: &str) -> Result<TermRecord, FormatError> {
        if query.is_empty() {
            return Err(FormatError::EmptyQuery);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&TermRequest { query })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            tracing::warn!("Term endpoint returned HTTP {}: {}", status, message);
            return Err(FormatError::Upstream(if message.is_empty() {
                format!("AI request failed (HTTP {})", status)
            } else {
                message
            }));
        }

        let mut record: TermRecord = response
            .json()
            .await
            .map_err(|e| FormatError::Upstream(format!("Failed to parse response: {}", e)))?;

        if record.term.is_empty() {
            record.term = query.to_string();
        }

        Ok(record)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: format!("remote ({})", self.endpoint),
            model: None,
            requires_api_key: false,
        }
    }
}
