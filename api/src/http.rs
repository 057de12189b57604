//! One GET-and-decode path shared by both API clients.

use dioxus_logger::tracing::warn;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Fetches `url` and decodes the JSON body into `T`.
///
/// The body is read as text before decoding so a bad payload surfaces as
/// [`ApiError::Malformed`] instead of being folded into a transport error.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, ApiError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("GET {} failed: {}", url, e);
            return Err(ApiError::Transport(e));
        }
    };
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("GET {} failed with status {}", url, status);
        return Err(ApiError::Status {
            code: status.as_u16(),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("GET {} returned an undecodable body: {}", url, e);
        ApiError::Malformed {
            reason: e.to_string(),
        }
    })
}
