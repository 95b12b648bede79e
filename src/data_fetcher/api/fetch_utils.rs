//! Request execution with retry, backoff and envelope decoding

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use super::client::{ApiClient, UpstreamErrorPolicy};
use super::urls::with_page;
use crate::constants::API_KEY_HEADER;
use crate::constants::retry::{BACKOFF_STEP_MS, MAX_ATTEMPTS};
use crate::data_fetcher::models::ApiResponse;
use crate::data_fetcher::pagination::next_page;
use crate::error::AppError;

/// Wait inserted after a failed `attempt` (1-based): 100ms, 200ms, 300ms, ...
pub fn backoff_for_attempt(attempt: u32) -> Duration {
    Duration::from_millis(u64::from(attempt) * BACKOFF_STEP_MS)
}

/// Whether a finished round trip should be attempted again.
///
/// Transport errors and 5xx responses are retried; everything below 500,
/// including 4xx client errors, is final.
fn should_retry(outcome: &Result<Response, reqwest::Error>) -> bool {
    match outcome {
        Ok(response) => response.status().as_u16() >= 500,
        Err(_) => true,
    }
}

impl ApiClient {
    /// Performs an authenticated GET of `endpoint` and decodes the response
    /// envelope with `T` as its payload.
    ///
    /// The round trip is attempted up to three times. Transport errors and
    /// 5xx responses are retried after a linear backoff; 4xx responses are
    /// not. Cancelling `cancel` aborts the in-flight request or the pending
    /// backoff wait immediately and is never retried.
    ///
    /// # Errors
    /// * `AppError::Network` - the last attempt failed at the transport level
    /// * `AppError::Cancelled` - `cancel` fired before the call finished
    /// * `AppError::Api` - the final status was not 200
    /// * `AppError::Decode` - the body did not match `ApiResponse<T>`
    /// * `AppError::Upstream` - the envelope carried errors and the client
    ///   uses [`UpstreamErrorPolicy::Fail`]
    #[instrument(skip(self, cancel))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut attempt = 1u32;
        let outcome = loop {
            if cancel.is_cancelled() {
                return Err(AppError::cancelled(endpoint));
            }

            info!("API request attempt {attempt}: {endpoint}");
            let request = self
                .http
                .get(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .header(CONTENT_TYPE, "application/json");

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AppError::cancelled(endpoint)),
                outcome = request.send() => outcome,
            };

            if !should_retry(&outcome) || attempt >= MAX_ATTEMPTS {
                break outcome;
            }

            let backoff = backoff_for_attempt(attempt);
            match &outcome {
                Ok(response) => warn!(
                    "Retrying {endpoint} after {backoff:?} due to status {} (attempt {attempt}/{MAX_ATTEMPTS})",
                    response.status()
                ),
                Err(e) => warn!(
                    "Retrying {endpoint} after {backoff:?} due to error: {e} (attempt {attempt}/{MAX_ATTEMPTS})"
                ),
            }
            drop(outcome);

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AppError::cancelled(endpoint)),
                _ = tokio::time::sleep(backoff) => {}
            }
            attempt += 1;
        };

        let response = outcome.map_err(|e| {
            error!("Request failed for {endpoint} after {attempt} attempts: {e}");
            AppError::network(endpoint, e)
        })?;

        let status = response.status();
        debug!("Response status: {status}");

        if status != StatusCode::OK {
            // Best effort, the body is only kept for diagnostics
            let body = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AppError::cancelled(endpoint)),
                body = response.bytes() => body.map(|b| b.to_vec()).unwrap_or_default(),
            };
            error!("HTTP {status} for {endpoint}");
            return Err(AppError::api_error(status.as_u16(), status.to_string(), body));
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AppError::cancelled(endpoint)),
            body = response.bytes() => body.map_err(|e| AppError::network(endpoint, e))?,
        };
        debug!("Response length: {} bytes", body.len());

        let envelope: ApiResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            error!("Failed to decode response from {endpoint}: {e}");
            let preview: String = String::from_utf8_lossy(&body).chars().take(200).collect();
            debug!("Response text (first 200 chars): {preview}");
            AppError::Decode(e)
        })?;

        if envelope.has_errors() {
            warn!(
                "API reported errors for {endpoint}: {}",
                envelope.errors.join("; ")
            );
            if self.upstream_errors == UpstreamErrorPolicy::Fail {
                return Err(AppError::upstream(envelope.errors));
            }
        }

        Ok(envelope)
    }

    /// Like [`execute`](Self::execute) but returns only the payload.
    pub async fn execute_payload<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        endpoint: &str,
    ) -> Result<T, AppError> {
        Ok(self.execute(cancel, endpoint).await?.response)
    }

    /// Fetches every page of a list endpoint and concatenates the payloads.
    ///
    /// Starts from `endpoint` as-is and follows the envelope's `paging`
    /// descriptor; a response without one is treated as the only page.
    #[instrument(skip(self, cancel))]
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        endpoint: &str,
    ) -> Result<Vec<T>, AppError> {
        let mut items = Vec::new();
        let mut page = 1u32;
        loop {
            let path = if page == 1 {
                endpoint.to_string()
            } else {
                with_page(endpoint, page)
            };
            let envelope: ApiResponse<Vec<T>> = self.execute(cancel, &path).await?;
            items.extend(envelope.response);

            match envelope.paging.as_ref().and_then(next_page) {
                Some(next) if next > page => {
                    debug!("Following page {next} of {endpoint}");
                    page = next;
                }
                _ => break,
            }
        }
        Ok(items)
    }
}
