//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to mock the delivery service in integration tests.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/offices")
//!         .respond_with_json(json!(["HCA01"]))
//!         .mount()
//!         .await;
//!
//!     // Your code calls server.url() as the host
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(400)` or `.respond_with_status_body(400, body)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` to assert call count, then `server.verify()`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// A running mock HTTP server plus a fluent stubbing interface.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    /// Start a mock server on a random local port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Stub a GET request to `request_path` (query string not matched).
    pub fn expect_get(&self, request_path: &str) -> StubBuilder<'_> {
        self.stub("GET", request_path)
    }

    /// Stub a POST request to `request_path` (query string not matched).
    pub fn expect_post(&self, request_path: &str) -> StubBuilder<'_> {
        self.stub("POST", request_path)
    }

    /// Assert that all mounted expectations were met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    fn stub(&self, http_method: &str, request_path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            mock: Mock::given(method(http_method)).and(path(request_path)),
            response: ResponseTemplate::new(200),
            expected_calls: None,
        }
    }
}

/// Builder for one stubbed request/response pair.
pub struct StubBuilder<'a> {
    server: &'a MockServer,
    mock: MockBuilder,
    response: ResponseTemplate,
    expected_calls: Option<u64>,
}

impl StubBuilder<'_> {
    /// Require a request header to match.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.mock = self.mock.and(header(name, value));
        self
    }

    /// Require a query parameter to match.
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.mock = self.mock.and(query_param(name, value));
        self
    }

    /// Require the request body to contain a substring.
    pub fn with_body_containing(mut self, substring: &str) -> Self {
        self.mock = self.mock.and(body_string_contains(substring));
        self
    }

    /// Respond 200 with a JSON body.
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.response = ResponseTemplate::new(200).set_body_json(body);
        self
    }

    /// Respond 200 with a plain body.
    pub fn respond_with_body(mut self, body: &str) -> Self {
        self.response = ResponseTemplate::new(200).set_body_string(body);
        self
    }

    /// Respond with a bare status code and empty body.
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.response = ResponseTemplate::new(status);
        self
    }

    /// Respond with a status code and body, for structured error responses.
    pub fn respond_with_status_body(mut self, status: u16, body: &str) -> Self {
        self.response = ResponseTemplate::new(status).set_body_string(body);
        self
    }

    /// Delay the response, for timeout simulation.
    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.response = self.response.set_delay(delay);
        self
    }

    /// Assert the stub is called exactly `times` times (checked by
    /// `MockHttpServer::verify` or on server drop).
    pub fn expect_times(mut self, times: u64) -> Self {
        self.expected_calls = Some(times);
        self
    }

    /// Register the stub with the server.
    pub async fn mount(self) {
        let mut mock = self.mock.respond_with(self.response);
        if let Some(times) = self.expected_calls {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
