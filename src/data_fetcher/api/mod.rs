pub mod client;
pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;

pub use client::{ApiClient, UpstreamErrorPolicy};
pub use fetch_utils::backoff_for_attempt;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export URL utilities
pub use urls::*;
