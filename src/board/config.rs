//! Runtime configuration for storage and the description enhancer.
//!
//! Both configurations have usable defaults and can be read from the process
//! environment. The `from_lookup` constructors take the variable source as a
//! closure so callers and tests can supply values without touching the real
//! environment.

use camino::Utf8PathBuf;
use std::time::Duration;

/// Environment variable naming the blob store directory.
pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";
/// Primary environment variable holding the enhancer credential.
pub const API_KEY_ENV: &str = "API_KEY";
/// Fallback environment variable holding the enhancer credential.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the enhancer timeout, in whole seconds.
pub const ENHANCE_TIMEOUT_ENV: &str = "TASKBOARD_ENHANCE_TIMEOUT_SECS";

/// Location of the file-backed blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one file per stored key.
    pub data_dir: Utf8PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(".taskboard"),
        }
    }
}

impl StoreConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration from an arbitrary variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup(DATA_DIR_ENV)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map_or_else(Self::default, |dir| Self {
                data_dir: Utf8PathBuf::from(dir),
            })
    }
}

/// Settings for the hosted description enhancer.
#[derive(Clone, PartialEq)]
pub struct EnhancerConfig {
    /// Credential for the generation API. Enhancement is skipped without it.
    pub api_key: Option<String>,
    /// Model used to generate descriptions.
    pub model: String,
    /// Base URL of the generation API.
    pub endpoint: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Upper bound on a single enhancement call; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_owned(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            temperature: 0.7,
            max_output_tokens: 100,
            timeout: Some(Duration::from_secs(20)),
        }
    }
}

impl std::fmt::Debug for EnhancerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnhancerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl EnhancerConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration from an arbitrary variable source.
    ///
    /// Blank credentials count as absent. An unparseable timeout keeps the
    /// default; `0` disables the timeout.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let api_key = non_blank(API_KEY_ENV).or_else(|| non_blank(GEMINI_API_KEY_ENV));
        let defaults = Self::default();
        let timeout = match lookup(ENHANCE_TIMEOUT_ENV).map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(0)) => None,
            Some(Ok(secs)) => Some(Duration::from_secs(secs)),
            Some(Err(_)) | None => defaults.timeout,
        };

        Self {
            api_key,
            timeout,
            ..defaults
        }
    }

    /// Sets the credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL of the generation API.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
