//! Configuration for the HTTP transport

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{LiteAgentError, Result};

/// Default total request timeout (5 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Base URL used by [`ClientConfig::from_env`] when `LITE_AGENT_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable holding the server base URL
pub const ENV_URL: &str = "LITE_AGENT_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "LITE_AGENT_TIMEOUT_SECS";

/// Environment variable toggling TLS certificate verification
pub const ENV_VERIFY_TLS: &str = "LITE_AGENT_VERIFY_TLS";

/// Construction-time client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    verify_tls: bool,
}

impl ClientConfig {
    /// Configuration with default timeout and TLS verification
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the URL does not parse or is not http(s)
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
            verify_tls: true,
        })
    }

    /// Create a new builder
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the URL does not parse or is not http(s)
    pub fn builder(base_url: &str) -> Result<ClientConfigBuilder> {
        Ok(ClientConfigBuilder {
            config: Self::new(base_url)?,
        })
    }

    /// Read `LITE_AGENT_URL`, `LITE_AGENT_TIMEOUT_SECS` and `LITE_AGENT_VERIFY_TLS`
    ///
    /// # Errors
    /// Returns `InvalidConfig` if any variable holds a malformed value
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(ENV_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut builder = Self::builder(&base_url)?;

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                LiteAgentError::invalid_config(format!("{ENV_TIMEOUT_SECS} must be seconds, got '{raw}'"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Ok(raw) = env::var(ENV_VERIFY_TLS) {
            builder = builder.verify_tls(parse_flag(&raw).ok_or_else(|| {
                LiteAgentError::invalid_config(format!("{ENV_VERIFY_TLS} must be a boolean, got '{raw}'"))
            })?);
        }

        Ok(builder.build())
    }

    /// Server base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Total request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether TLS certificates are verified
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Build the URL for a sequence of path segments
    ///
    /// Segments are percent-encoded as path segments and otherwise used verbatim.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the base URL cannot carry a path
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                LiteAgentError::invalid_config(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Builder for `ClientConfig`
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set total request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set total request timeout in seconds
    #[must_use]
    pub const fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Enable or disable TLS certificate verification
    #[must_use]
    pub const fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| LiteAgentError::invalid_config(format!("invalid base URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        scheme => Err(LiteAgentError::invalid_config(format!(
            "unsupported base URL scheme '{scheme}' in '{raw}'"
        ))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
