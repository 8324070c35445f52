//! Endpoint configuration: defaults, optional TOML file, then environment.

use crate::llm::error::{GatewayError, GatewayResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

pub const ENV_API_KEY: &str = "CRUMBLY_GEMINI_API_KEY";
pub const ENV_MODEL: &str = "CRUMBLY_GEMINI_MODEL";
pub const ENV_API_URL_BASE: &str = "CRUMBLY_GEMINI_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "CRUMBLY_REQUEST_TIMEOUT_SECONDS";

#[derive(Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_url_base: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub request_timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url_base: DEFAULT_API_URL_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

// Hand-written so the key never shows up in debug output.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_url_base", &self.api_url_base)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

impl GatewayConfig {
    /// Loads `.env`, then the optional TOML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = base.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overlays values found through `lookup` (normally the process environment).
    pub fn apply_env<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        if let Some(base) = lookup(ENV_API_URL_BASE) {
            self.api_url_base = base;
        }
        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT) {
            self.request_timeout_seconds = timeout
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", ENV_REQUEST_TIMEOUT))?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> GatewayResult<()> {
        if self.model.trim().is_empty() {
            return Err(GatewayError::Config {
                reason: "model name cannot be empty".to_string(),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(GatewayError::Config {
                reason: "request timeout must be at least one second".to_string(),
            });
        }
        self.endpoint().map(|_| ())
    }

    /// Full `generateContent` URL, without the key.
    pub fn endpoint(&self) -> GatewayResult<Url> {
        let raw = format!(
            "{}/{}:generateContent",
            self.api_url_base.trim_end_matches('/'),
            self.model
        );
        Url::parse(&raw).map_err(|e| GatewayError::Config {
            reason: format!("invalid endpoint {}: {}", raw, e),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GatewayConfig::default(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn with_api_url_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_url_base = base.into();
        self
    }

    pub fn with_request_timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.request_timeout_seconds = seconds;
        self
    }

    pub fn build(self) -> GatewayResult<GatewayConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for GatewayConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
