use reqwest::Client;

use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS};
use crate::error::AppError;

/// What to do when a 200 response carries a non-empty `errors` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpstreamErrorPolicy {
    /// Log a warning and return the payload anyway.
    #[default]
    Ignore,
    /// Fail the call with [`AppError::Upstream`].
    Fail,
}

/// API-Football client.
///
/// Holds the API key, the base URL and the HTTP transport. It carries no
/// per-request state, so clones can be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(super) api_key: String,
    pub(super) base_url: String,
    pub(super) http: Client,
    pub(super) upstream_errors: UpstreamErrorPolicy,
}

impl ApiClient {
    /// Creates a client for the public service with the default 10 second timeout.
    ///
    /// # Errors
    /// * `AppError::Config` - the API key is empty
    /// * `AppError::HttpClient` - the transport could not be built
    pub fn new(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::with_settings(api_key.into(), DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS)
    }

    /// Creates a client from loaded configuration (key, base URL and timeout).
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_settings(
            config.api_key.clone(),
            &config.api_base_url,
            config.http_timeout_seconds,
        )
    }

    fn with_settings(api_key: String, base_url: &str, timeout_seconds: u64) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::config_error("API key cannot be empty"));
        }
        let http = create_http_client_with_timeout(timeout_seconds).map_err(AppError::HttpClient)?;
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            upstream_errors: UpstreamErrorPolicy::default(),
        })
    }

    /// Replaces the HTTP transport, keeping the credential.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Sends all requests to `base_url` instead of the public service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_upstream_error_policy(mut self, policy: UpstreamErrorPolicy) -> Self {
        self.upstream_errors = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upstream_error_policy(&self) -> UpstreamErrorPolicy {
        self.upstream_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_uses_public_base_url() {
        let client = ApiClient::new("dummy-key").unwrap();
        assert_eq!(client.base_url(), "https://v3.football.api-sports.io");
        assert_eq!(client.upstream_error_policy(), UpstreamErrorPolicy::Ignore);
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = ApiClient::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let err = ApiClient::new("   ").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_overrides_keep_credential() {
        let client = ApiClient::new("dummy-key")
            .unwrap()
            .with_http_client(super::super::http_client::create_test_http_client())
            .with_base_url("http://127.0.0.1:9999/")
            .with_upstream_error_policy(UpstreamErrorPolicy::Fail);
        assert_eq!(client.api_key, "dummy-key");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
        assert_eq!(client.upstream_error_policy(), UpstreamErrorPolicy::Fail);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            api_key: "from-config".to_string(),
            api_base_url: "http://localhost:8080".to_string(),
            log_file_path: None,
            http_timeout_seconds: 3,
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.api_key, "from-config");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
