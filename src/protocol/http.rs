// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport backed by `reqwest`.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;

use crate::error::{TransportError, UsageError};
use crate::protocol::{DEFAULT_BASE_URL, RawResponse, Transport};

// ============================================================================
// HttpConfig - Connection settings for the Istabai API
// ============================================================================

/// Configuration for the HTTP transport.
///
/// # Examples
///
/// ```
/// use istabai_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Public endpoint with defaults
/// let config = HttpConfig::default();
/// assert_eq!(config.base_url(), "https://api.istabai.com");
///
/// // Custom endpoint
/// let config = HttpConfig::new("http://localhost:8080")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-home/1.0");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Environment variable overriding the base URL.
    pub const ENV_BASE_URL: &'static str = "ISTABAI_BASE_URL";

    /// Environment variable overriding the timeout, in whole seconds.
    pub const ENV_TIMEOUT_SECS: &'static str = "ISTABAI_TIMEOUT_SECS";

    /// Creates a configuration for the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme and host of the API, e.g. `https://api.istabai.com`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Builds a configuration from the environment, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvalidConfiguration` if the timeout is not a
    /// positive whole number of seconds.
    pub fn from_env() -> Result<Self, UsageError> {
        let mut config = match std::env::var(Self::ENV_BASE_URL) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(Self::ENV_TIMEOUT_SECS) {
            config = config.with_timeout(parse_timeout_secs(&raw)?);
        }

        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an http(s) URL or the HTTP client
    /// cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, TransportError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TransportError::InvalidBaseUrl(self.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // 300 means "invalid API key" for this service, never a redirect.
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .redirect(Policy::none())
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpTransport {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

// A zero timeout would fail every request.
fn parse_timeout_secs(raw: &str) -> Result<Duration, UsageError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(UsageError::InvalidConfiguration(format!(
            "{} must be a positive whole number of seconds, got '{raw}'",
            HttpConfig::ENV_TIMEOUT_SECS
        ))),
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// `reqwest`-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the given base URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        HttpConfig::new(base_url).into_transport()
    }
}

impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        tracing::trace!(status, body = %body, "Received HTTP response");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent().starts_with("istabai_lib/"));
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("http://127.0.0.1:9000")
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("tests");
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent(), "tests");
    }

    #[test]
    fn timeout_secs_parsing() {
        assert_eq!(parse_timeout_secs("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout_secs(" 5 ").unwrap(), Duration::from_secs(5));

        for raw in ["0", "", "ten", "-1", "1.5"] {
            let err = parse_timeout_secs(raw).unwrap_err();
            assert!(
                matches!(&err, UsageError::InvalidConfiguration(msg) if msg.contains("ISTABAI_TIMEOUT_SECS")),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn into_transport_trims_trailing_slash() {
        let transport = HttpConfig::new("https://api.istabai.com/")
            .into_transport()
            .unwrap();
        assert_eq!(transport.base_url(), "https://api.istabai.com");
    }

    #[test]
    fn into_transport_rejects_non_http_url() {
        let err = HttpTransport::new("api.istabai.com").unwrap_err();
        assert!(matches!(err, TransportError::InvalidBaseUrl(url) if url == "api.istabai.com"));
    }
}
