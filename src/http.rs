use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::error;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::error::ApiError;

const TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking agent shared by the API clients.
///
/// Non-2xx responses come back as `Ok` so their bodies can be reported.
pub fn agent() -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(TIMEOUT))
        .http_status_as_error(false)
        .build();
    Agent::new_with_config(config)
}

/// Read a response body, turning a non-success status into [`ApiError::Status`].
pub fn read_body(response: Result<Response<Body>, ureq::Error>) -> Result<String, ApiError> {
    let response = response.map_err(|e| {
        error!(error = %e, "Request failed");
        ApiError::Request(e.to_string())
    })?;
    let status = response.status();
    let mut body_reader = response.into_body();
    let body = body_reader
        .read_to_string()
        .map_err(|e| ApiError::Request(format!("failed to read response body: {}", e)))?;

    if !status.is_success() {
        error!(status = status.as_u16(), body = %body, "Unexpected status");
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
