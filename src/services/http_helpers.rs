use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// HTTP client shared by the Sheets sink and the completion client.
/// `timeout_secs` bounds each whole request; `None` leaves it unbounded.
pub fn build_http_client(timeout_secs: Option<u64>) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}
