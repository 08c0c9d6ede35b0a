//! Response status checking shared by the raw endpoint calls.

use reqwest::Response;

use crate::error::{ClientError, Result};

/// Pass a 2xx response through; turn anything else into [`ClientError::ApiError`].
///
/// The body of a failed response becomes the error message. Backends that
/// answer with an `ApiResponse` envelope have its `message` field extracted.
pub async fn check_response(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message: error_message(&body),
    })
}

/// Best-effort human-readable message from an error body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "error_description", "error"]
                .iter()
                .find_map(|key| json.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
