//! Configuration for screenshot-to-code generation.
//!
//! All behaviour is controlled through [`GenerationConfig`], built via its
//! [`GenerationConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share the config across requests (it is read-only once built)
//! and to point the client at a stub server in tests via `base_url`.
//!
//! # Design choice: builder over constructor
//! Callers set only what they care about and rely on documented defaults for
//! the rest; `from_env()` covers the common "just read the API key" case.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default model when `ANTHROPIC_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Upper bound on generated output, in model output tokens.
///
/// A fixed process-wide constant, not per-request adjustable: 4 000 tokens
/// covers a full single-file component while keeping per-request cost
/// predictable.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Anthropic Messages API endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// `anthropic-version` header value.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Configuration for code generation.
///
/// Built via [`GenerationConfig::builder()`] or [`GenerationConfig::from_env()`].
///
/// # Example
/// ```rust
/// use shot2code::GenerationConfig;
///
/// let config = GenerationConfig::builder()
///     .api_key("sk-ant-...")
///     .model("claude-sonnet-4-20250514")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Anthropic API key. Empty means "not configured" — the validator
    /// rejects requests with a configuration error before any upstream call.
    #[serde(skip_serializing, default)]
    pub api_key: String,

    /// Model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Maximum output tokens per generation. Default: [`DEFAULT_MAX_TOKENS`].
    pub max_tokens: u32,

    /// API endpoint base URL. Default: [`DEFAULT_BASE_URL`].
    ///
    /// Override to point at a proxy or a test stub.
    pub base_url: String,

    /// `anthropic-version` header. Default: [`DEFAULT_API_VERSION`].
    pub api_version: String,

    /// Per-call HTTP timeout in seconds. Default: 60.
    ///
    /// This transport timeout is the only bound on request duration; the
    /// pipeline carries no separate cancellation budget.
    pub request_timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key_fingerprint())
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl GenerationConfig {
    /// Create a new builder.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a config from the environment.
    ///
    /// Reads `ANTHROPIC_API_KEY` (may be absent — requests then fail with a
    /// configuration error, which lets a server start without a key and
    /// report the problem per request) and `ANTHROPIC_MODEL` (optional,
    /// defaults to [`DEFAULT_MODEL`]).
    pub fn from_env() -> Result<Self, GenerateError> {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            builder = builder.api_key(key);
        }
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL") {
            if !model.is_empty() {
                builder = builder.model(model);
            }
        }
        builder.build()
    }

    /// Redacted form of the key, safe for Debug output and logs.
    fn api_key_fingerprint(&self) -> String {
        if self.api_key.is_empty() {
            "<unset>".to_string()
        } else {
            format!("<set, {} chars>", self.api_key.len())
        }
    }
}

/// Builder for [`GenerationConfig`].
#[derive(Debug)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
}

impl GenerationConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GenerationConfig, GenerateError> {
        let c = &self.config;
        if c.model.is_empty() {
            return Err(GenerateError::InvalidConfig(
                "Model identifier must not be empty".into(),
            ));
        }
        if c.max_tokens == 0 {
            return Err(GenerateError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }
        if c.base_url.is_empty() {
            return Err(GenerateError::InvalidConfig(
                "base_url must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.base_url, "https://api.anthropic.com");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn builder_overrides() {
        let config = GenerationConfig::builder()
            .api_key("test-key")
            .model("claude-haiku-4-20250514")
            .max_tokens(2048)
            .base_url("http://127.0.0.1:9999")
            .build()
            .unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "claude-haiku-4-20250514");
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn empty_model_rejected() {
        let err = GenerationConfig::builder().model("").build().unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("Model"));
    }

    #[test]
    fn zero_max_tokens_rejected() {
        assert!(GenerationConfig::builder().max_tokens(0).build().is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GenerationConfig::builder()
            .api_key("sk-ant-secret")
            .build()
            .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-ant-secret"));
        assert!(rendered.contains("<set"));
    }
}
