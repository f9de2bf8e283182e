use std::time::Duration;

use async_trait::async_trait;
use medgloss_types::TermRecord;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::extract::{normalize_record, parse_model_output};
use crate::prompt::{build_prompt, term_schema};
use crate::{FormatError, Formatter, ProviderMetadata};

const API_KEY_NAME: &str = "OPENAI_API_KEY";

/// Formatter backed by the OpenAI Responses API
#[derive(Clone)]
pub struct OpenAiFormatter {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
    structured_output: bool,
}

impl OpenAiFormatter {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
            structured_output: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, FormatError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }

    fn request_body(&self, prompt: String) -> ResponsesRequest {
        let text = self.structured_output.then(|| {
            json!({
                "format": {
                    "type": "json_schema",
                    "name": "medical_term",
                    "strict": true,
                    "schema": term_schema(),
                }
            })
        });

        ResponsesRequest {
            model: self.model.clone(),
            input: prompt,
            text,
        }
    }
}

#[async_trait]
impl Formatter for OpenAiFormatter {
    async fn format(&self, query: &str) -> Result<TermRecord, FormatError> {
        if query.is_empty() {
            return Err(FormatError::EmptyQuery);
        }

        let Some(api_key) = self.api_key.as_deref() else {
            return Err(FormatError::MissingCredential(API_KEY_NAME));
        };

        let body = self.request_body(build_prompt(query));

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("OpenAI request failed with HTTP {}", status);
            return Err(FormatError::Upstream(if text.is_empty() {
                "OpenAI request failed".to_string()
            } else {
                text
            }));
        }

        let output: ResponsesOutput = response
            .json()
            .await
            .map_err(|e| FormatError::Upstream(format!("Failed to parse response: {}", e)))?;

        let text = output.text();
        tracing::debug!("Model returned {} chars", text.len());

        let object = parse_model_output(&text)?;
        Ok(normalize_record(&object, query))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            model: Some(self.model.clone()),
            requires_api_key: true,
        }
    }
}

#[derive(Serialize)]
struct ResponsesRequest {
    model: String,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<serde_json::Value>,
}

#[derive(Deserialize, Default)]
struct ResponsesOutput {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesOutput {
    /// `output_text` when present, otherwise every `output_text` content part
    fn text(self) -> String {
        if let Some(text) = self.output_text {
            return text;
        }

        self.output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("")
    }
}
