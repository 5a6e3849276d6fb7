//! OpenAI-compatible client implementation.
//!
//! [`OpenAiCompatClient`] works with any API that follows the OpenAI chat
//! completion format with structured output (`response_format.json_schema`).
//! This covers OpenAI itself and Gemini's OpenAI-compat surface, which is the
//! default endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::InferenceClient;
use crate::config::InferenceConfig;
use crate::error::{ClientError, Result};
use crate::schema::ResponseSchema;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// An inference client that speaks the OpenAI chat-completion protocol.
///
/// # Construction
///
/// The API key is passed explicitly -- the client never reads the
/// environment. Callers decide what counts as a configured credential before
/// constructing the client.
///
/// ```rust,ignore
/// use repasse_llm::{InferenceConfig, OpenAiCompatClient};
///
/// let client = OpenAiCompatClient::new(InferenceConfig::default(), api_key);
/// ```
pub struct OpenAiCompatClient {
    config: InferenceConfig,
    http: reqwest::Client,
    api_key: String,
}

impl OpenAiCompatClient {
    /// Create a new client with an explicit API key.
    pub fn new(config: InferenceConfig, api_key: impl Into<String>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Returns the endpoint configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Returns the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl InferenceClient for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn submit(&self, prompt: &str, schema: &ResponseSchema) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(ClientError::NotConfigured("empty API key".into()));
        }

        let url = self.completions_url();
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: Some(prompt.to_string()),
            }],
            response_format: ResponseFormat {
                format_type: "json_schema".into(),
                json_schema: JsonSchemaFormat {
                    name: "constrained_output".into(),
                    schema: schema.to_json_schema(),
                    strict: true,
                },
            },
        };

        debug!(
            endpoint = %self.config.name,
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "sending constrained inference request"
        );

        let mut req = self
            .http
            .post(&url)
            .timeout(self.timeout())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");

        for (k, v) in &self.config.headers {
            req = req.header(k.as_str(), v.as_str());
        }

        let response = req.json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Http(e)
            }
        })?;
        let status = response.status();

        if !status.is_success() {
            if status.as_u16() == 429 {
                let retry_ms = parse_retry_after_header(&response).unwrap_or(1000);
                return Err(ClientError::RateLimited {
                    retry_after_ms: retry_ms,
                });
            }

            let text = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ClientError::AuthFailed(text));
            }

            if status.as_u16() == 404 {
                return Err(ClientError::ModelNotFound(format!(
                    "model '{}': {text}",
                    self.config.model
                )));
            }

            return Err(ClientError::RequestFailed(format!("HTTP {status}: {text}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("failed to parse response: {e}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        debug!(
            endpoint = %self.config.name,
            content_chars = content.len(),
            "inference response received"
        );

        Ok(content)
    }
}

impl std::fmt::Debug for OpenAiCompatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatClient")
            .field("name", &self.config.name)
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .field("api_key", &"***")
            .finish()
    }
}

/// Try to extract a retry-after value from the HTTP `Retry-After` header.
///
/// The header value can be either seconds (integer or float) or an HTTP-date.
/// Only the numeric form is handled; HTTP-date is rare for API providers.
fn parse_retry_after_header(response: &reqwest::Response) -> Option<u64> {
    let header_val = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())?;

    if let Ok(secs) = header_val.parse::<f64>() {
        return Some((secs * 1000.0).max(0.0) as u64);
    }

    None
}

// ── Wire types (OpenAI chat-completion format) ──────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    schema: serde_json::Value,
    strict: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}
