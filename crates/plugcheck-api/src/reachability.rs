//! Reachability predicate used by the plugin checker.
//!
//! The checker never talks to the network itself. It hands a URL and a
//! method to a [`Reachability`] implementation and returns whatever that
//! implementation decides, errors included.

use std::future::Future;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use tracing::debug;
use url::Url;

use crate::errors::ApiError;

/// Decides whether a URL answers a request with the given method.
pub trait Reachability: Send + Sync + std::fmt::Debug {
    /// Failure that is distinct from "not reachable".
    type Error: std::error::Error + Send + Sync + 'static;

    /// Probe `url` with `method`.
    fn is_reachable(
        &self,
        url: &str,
        method: &Method,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

impl<T: Reachability> Reachability for Arc<T> {
    type Error = T::Error;

    fn is_reachable(
        &self,
        url: &str,
        method: &Method,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        (**self).is_reachable(url, method)
    }
}

/// Reachability over HTTP.
///
/// Any response other than `404 Not Found` counts as reachable: the route
/// exists even if it rejects the method or the credentials. Transport
/// failures and timeouts count as unreachable. Only a URL that cannot be
/// parsed is reported as an error.
#[derive(Debug, Clone)]
pub struct HttpReachability {
    http: reqwest::Client,
}

impl HttpReachability {
    /// Create a predicate over a configured HTTP client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Reachability for HttpReachability {
    type Error = ApiError;

    async fn is_reachable(&self, url: &str, method: &Method) -> Result<bool, ApiError> {
        let parsed = Url::parse(url).map_err(|source| ApiError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        match self.http.request(method.clone(), parsed).send().await {
            Ok(resp) => {
                let status = resp.status();
                let reachable = is_reachable_status(status);
                debug!(
                    url,
                    %method,
                    status = status.as_u16(),
                    reachable,
                    "Probe answered"
                );
                Ok(reachable)
            }
            Err(e) => {
                debug!(url, %method, error = %e, "Probe failed");
                Ok(false)
            }
        }
    }
}

/// Whether a response status means the probed route exists.
pub fn is_reachable_status(status: StatusCode) -> bool {
    status != StatusCode::NOT_FOUND
}
