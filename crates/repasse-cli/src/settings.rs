//! Environment-based configuration for the CLI.
//!
//! The credential and endpoint overrides are read once at startup and
//! injected into the gateway; nothing below this layer touches the
//! environment.

use std::sync::Arc;

use repasse_gateway::{GatewayConfig, InferenceGateway, credential_configured};
use repasse_llm::{InferenceConfig, OpenAiCompatClient};

/// Environment variable holding the inference API key.
pub const API_KEY_ENV: &str = "REPASSE_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "REPASSE_BASE_URL";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "REPASSE_MODEL";

/// Configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The raw credential value, if any (may still be a placeholder).
    pub api_key: Option<String>,

    /// Endpoint configuration with env overrides applied.
    pub inference: InferenceConfig,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        let mut inference = InferenceConfig::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            inference.base_url = base_url;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            inference.model = model;
        }
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            inference,
        }
    }

    /// Whether the credential counts as configured.
    pub fn credential_configured(&self) -> bool {
        credential_configured(self.api_key.as_deref())
    }

    /// Build a gateway from these settings.
    pub fn gateway(&self, allow_demo_fallback: bool) -> InferenceGateway {
        let client = OpenAiCompatClient::new(
            self.inference.clone(),
            self.api_key.clone().unwrap_or_default(),
        );
        let config = GatewayConfig {
            credential: self.api_key.clone(),
            allow_demo_fallback,
            ..GatewayConfig::default()
        };
        InferenceGateway::new(config, Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repasse_llm::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};

    #[test]
    fn defaults_when_env_is_empty() {
        temp_env::with_vars_unset([API_KEY_ENV, BASE_URL_ENV, MODEL_ENV], || {
            let settings = Settings::from_env();
            assert!(settings.api_key.is_none());
            assert!(!settings.credential_configured());
            assert_eq!(settings.inference.base_url, DEFAULT_BASE_URL);
            assert_eq!(settings.inference.model, DEFAULT_MODEL);
        });
    }

    #[test]
    fn reads_key_and_overrides() {
        temp_env::with_vars(
            [
                (API_KEY_ENV, Some("test-key")),
                (BASE_URL_ENV, Some("https://example.com/v1")),
                (MODEL_ENV, Some("other-model")),
            ],
            || {
                let settings = Settings::from_env();
                assert!(settings.credential_configured());
                assert_eq!(settings.inference.base_url, "https://example.com/v1");
                assert_eq!(settings.inference.model, "other-model");
            },
        );
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        temp_env::with_var(API_KEY_ENV, Some("PLACEHOLDER_API_KEY"), || {
            let settings = Settings::from_env();
            assert!(settings.api_key.is_some());
            assert!(!settings.credential_configured());
        });
    }

    #[test]
    fn gateway_respects_demo_fallback_flag() {
        temp_env::with_var(API_KEY_ENV, Some("test-key"), || {
            let settings = Settings::from_env();
            assert!(settings.gateway(true).config().allow_demo_fallback);
            assert!(!settings.gateway(false).config().allow_demo_fallback);
        });
    }
}
