//! Shared test utilities for command testing.
//!
//! Provides a factory wired to a wiremock server standing in for the
//! backend, plus mount helpers for the plugin endpoints.

use plugcheck_core::config::MemoryConfig;
use plugcheck_core::iostreams::CapturedOutput;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::factory::Factory;

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: CapturedOutput,
    /// Wiremock mock server acting as the backend.
    pub server: MockServer,
}

impl TestHarness {
    /// Create a harness whose configured API URL points at the mock server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = MemoryConfig::new().with_api_url(format!("{}/api/", server.uri()));
        Self::build(server, config)
    }

    /// Create a harness with a custom `MemoryConfig`.
    pub async fn with_config(config: MemoryConfig) -> Self {
        let server = MockServer::start().await;
        Self::build(server, config)
    }

    fn build(server: MockServer, config: MemoryConfig) -> Self {
        let (factory, output) = Factory::test();
        let factory = factory
            .with_http_client(reqwest::Client::new())
            .with_config(Box::new(config));

        Self {
            factory,
            output,
            server,
        }
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Get captured stderr as a string.
    pub fn stderr(&self) -> String {
        self.output.stderr()
    }
}

// --- Wiremock helpers ---

/// Make the git integration endpoint answer `OPTIONS` with 200.
pub async fn mock_git_integration(server: &MockServer) {
    Mock::given(method("OPTIONS"))
        .and(path("/git/repository/meta/get"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Make the analytics endpoint answer `GET` with 200.
pub async fn mock_analytics(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/analytics/app/kibana"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}
