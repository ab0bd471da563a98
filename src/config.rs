//! Configuration for the trendlens client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "TRENDLENS_BACKEND_URL";
/// Environment variable holding the UI port.
pub const PORT_ENV: &str = "TRENDLENS_PORT";
/// Environment variable holding the backend request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "TRENDLENS_TIMEOUT_SECS";
/// Environment variable holding the number of posts the backend should scrape.
pub const POST_LIMIT_ENV: &str = "TRENDLENS_POST_LIMIT";

/// Backend used when nothing is configured (the summarizer's development address).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
/// Default port for the served UI.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backend URL could not be parsed.
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The backend URL parsed but is not usable as an HTTP base.
    #[error("unsupported backend url scheme: {0}")]
    UnsupportedScheme(String),

    /// A numeric variable held something else.
    #[error("invalid value for {key}: {value}")]
    InvalidNumber {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Runtime configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the summarization backend.
    pub backend_url: Url,
    /// Port the UI is served on.
    pub port: u16,
    /// Timeout applied to backend calls. `None` waits indefinitely.
    #[serde(default, with = "optional_duration_secs")]
    pub request_timeout: Option<Duration>,
    /// Number of posts the backend is asked to scrape per search.
    pub post_limit: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            port: DEFAULT_PORT,
            request_timeout: None,
            post_limit: None,
        }
    }
}

impl AppConfig {
    /// Create a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration from `TRENDLENS_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BACKEND_URL_ENV) {
            config = config.with_backend_url(&raw)?;
        } else {
            tracing::info!("{BACKEND_URL_ENV} not set, using default: {DEFAULT_BACKEND_URL}");
        }

        if let Some(port) = parse_number::<u16>(&lookup, PORT_ENV)? {
            config.port = port;
        }

        if let Some(secs) = parse_number::<u64>(&lookup, TIMEOUT_ENV)? {
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config.post_limit = parse_number::<u32>(&lookup, POST_LIMIT_ENV)?;

        Ok(config)
    }

    /// Set the backend base URL.
    ///
    /// # Errors
    /// Returns an error if `raw` is not an absolute `http`/`https` URL.
    pub fn with_backend_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        self.backend_url = url;
        Ok(self)
    }

    /// Set the UI port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the backend request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the per-search post limit.
    #[must_use]
    pub const fn with_post_limit(mut self, limit: u32) -> Self {
        self.post_limit = Some(limit);
        self
    }
}

#[allow(clippy::expect_used)]
fn default_backend_url() -> Url {
    Url::parse(DEFAULT_BACKEND_URL).expect("default backend url is a valid absolute url")
}

fn parse_number<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}

/// Serde module for optional `Duration` stored as whole seconds.
mod optional_duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
