//! Downloading remote images.

use reqwest::blocking::Client;
use tracing::{debug, info};

use super::{DecodeError, FetchOptions};

/// Download the body of `url`.
///
/// Non-success HTTP statuses are errors. The client and response are
/// dropped before returning, so no connection outlives the call.
///
/// # Errors
///
/// Returns `DecodeError::Network` for client setup, connection, status and
/// body read failures.
pub fn fetch_bytes(url: &str, options: &FetchOptions) -> Result<Vec<u8>, DecodeError> {
    let client = Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str())
        .build()
        .map_err(|e| DecodeError::Network(e.to_string()))?;

    debug!(url, timeout = ?options.timeout, "fetching image");

    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| DecodeError::Network(e.to_string()))?;

    let bytes = response
        .bytes()
        .map_err(|e| DecodeError::Network(e.to_string()))?;

    info!(url, bytes = bytes.len(), "fetched image");
    Ok(bytes.to_vec())
}
