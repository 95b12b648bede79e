//! Application-wide constants and configuration values
//!
//! This module centralizes the protocol constants and defaults so the
//! client, configuration and CLI agree on them.

/// Base URL of the API-Football v3 service
pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-apisports-key";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Retry policy for the request executor
pub mod retry {
    /// Total number of attempts per request, including the first one
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Backoff unit; the wait after attempt `n` is `n * BACKOFF_STEP_MS`
    pub const BACKOFF_STEP_MS: u64 = 100;
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_KEY: &str = "SOCCER_CLI_API_KEY";
    pub const BASE_URL: &str = "SOCCER_CLI_BASE_URL";
    pub const LOG_FILE: &str = "SOCCER_CLI_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "SOCCER_CLI_HTTP_TIMEOUT";
}

/// Name of the directory under the platform config dir
pub const APP_DIR_NAME: &str = "soccer_cli";

/// Default log file name
pub const LOG_FILE_NAME: &str = "soccer_cli.log";
