//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the transport used by [`ApiClient`](super::ApiClient): a pooled
/// reqwest client with a per-request timeout.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("soccer_cli/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Creates an HTTP client for testing with a short timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(5).expect("Failed to create test HTTP client")
}
