//! HTTP client construction.
//!
//! Provides default headers, User-Agent, authentication, and the
//! per-request timeout used by every probe.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Options for constructing an HTTP client.
pub struct HttpClientOptions {
    /// Application version for User-Agent.
    pub app_version: String,
    /// Token sent as `Authorization: Token <token>`.
    pub auth_token: Option<SecretString>,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl std::fmt::Debug for HttpClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientOptions")
            .field("app_version", &self.app_version)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Build a reqwest client with default configuration.
///
/// # Errors
///
/// Returns an error if a header value is malformed or the client cannot be
/// constructed.
pub fn build_client(opts: &HttpClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&format!("plugcheck {}", opts.app_version))?,
    );

    if let Some(ref token) = opts.auth_token {
        let mut value = HeaderValue::from_str(&auth_header_value(token.expose_secret()))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    debug!(timeout_ms = opts.timeout.as_millis(), "Building HTTP client");

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(opts.timeout)
        .build()?;

    Ok(client)
}

/// Format an authorization header value from a token.
pub fn auth_header_value(token: &str) -> String {
    format!("Token {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(token: Option<&str>) -> HttpClientOptions {
        HttpClientOptions {
            app_version: "1.0.0".to_string(),
            auth_token: token.map(SecretString::from),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_should_build_client_with_defaults() {
        assert!(build_client(&options(None)).is_ok());
    }

    #[test]
    fn test_should_build_client_with_token() {
        assert!(build_client(&options(Some("abc123"))).is_ok());
    }

    #[test]
    fn test_should_reject_token_with_newline() {
        assert!(build_client(&options(Some("bad\ntoken"))).is_err());
    }

    #[test]
    fn test_should_format_auth_header() {
        assert_eq!(auth_header_value("abc123"), "Token abc123");
    }

    #[test]
    fn test_should_redact_token_in_debug() {
        let dbg = format!("{:?}", options(Some("super-secret")));
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("[REDACTED]"));
    }
}
