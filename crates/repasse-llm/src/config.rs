//! Endpoint configuration for inference clients.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default chat-completions endpoint (Gemini's OpenAI-compatible surface).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for a single inference endpoint.
///
/// The API key is deliberately not part of this struct: it is injected into
/// the client constructor so that configuration stays loggable and the
/// credential never travels through serialized config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Human-readable endpoint name, used in log fields.
    pub name: String,

    /// Base URL for the OpenAI-compatible API.
    pub base_url: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Extra HTTP headers to include in every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request timeout in seconds. Defaults to 120.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            name: "gemini".into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            headers: HashMap::new(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_gemini_compat_endpoint() {
        let config = InferenceConfig::default();
        assert_eq!(config.name, "gemini");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.headers.is_empty());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let config = InferenceConfig {
            name: "test".into(),
            base_url: "https://example.com/v1".into(),
            model: "test-model".into(),
            headers: HashMap::from([("X-Custom".into(), "value".into())]),
            timeout_secs: Some(30),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: InferenceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, config.name);
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.model, config.model);
        assert_eq!(parsed.headers, config.headers);
        assert_eq!(parsed.timeout_secs, config.timeout_secs);
    }

    #[test]
    fn deserialize_minimal() {
        let json = r#"{
            "name": "minimal",
            "base_url": "https://example.com",
            "model": "m"
        }"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert!(config.headers.is_empty());
        assert!(config.timeout_secs.is_none());
    }
}
