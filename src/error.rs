use thiserror::Error;

/// Broad category of an [`AppError`], for callers that only need to branch
/// on what kind of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or cancellation.
    Network,
    /// Non-200 HTTP response.
    Api,
    /// Response body did not match the expected envelope or payload.
    Decode,
    /// The service reported errors inside a 200 response.
    Upstream,
    /// Invalid or missing configuration, or invalid arguments.
    Configuration,
    /// Local I/O, serialization or logging setup failure.
    Io,
}

#[derive(Debug, Error)]
pub enum AppError {
    // Transport errors
    #[error("Network error while requesting {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} was cancelled")]
    Cancelled { endpoint: String },

    // Non-success HTTP outcome, body kept for diagnostics
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Vec<u8>,
    },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API reported errors: {}", .errors.join("; "))]
    Upstream { errors: Vec<String> },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a transport error for the given endpoint
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a cancellation error for the given endpoint
    pub fn cancelled(endpoint: impl Into<String>) -> Self {
        Self::Cancelled {
            endpoint: endpoint.into(),
        }
    }

    /// Create an API error from a non-success response
    pub fn api_error(status: u16, message: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Create an error for errors reported inside a successful envelope
    pub fn upstream(errors: Vec<String>) -> Self {
        Self::Upstream { errors }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network { .. } | AppError::Cancelled { .. } => ErrorKind::Network,
            AppError::Api { .. } => ErrorKind::Api,
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::Upstream { .. } => ErrorKind::Upstream,
            AppError::Config(_) | AppError::HttpClient(_) => ErrorKind::Configuration,
            AppError::Io(_)
            | AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::LogSetup(_) => ErrorKind::Io,
        }
    }

    /// HTTP status code carried by an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body carried by an API error, lossily decoded as UTF-8
    pub fn body_text(&self) -> Option<String> {
        match self {
            AppError::Api { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }

    /// Check if error is retryable (transport issues and server errors).
    ///
    /// Cancellation is never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network { .. } => true,
            AppError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled { .. })
    }

    /// Check if error indicates the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Api { status: 404, .. })
    }
}
