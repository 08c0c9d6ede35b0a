//! Account registration.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::check_response;
use crate::error::Result;
use crate::models::Registration;

/// POST `{base_url}/api/sign_up` with the registration as a JSON body.
///
/// Returns the server's JSON reply, which carries the application-level
/// `status` of the registration.
pub async fn sign_up(
    client: &Client,
    base_url: &str,
    registration: &Registration,
) -> Result<serde_json::Value> {
    debug!("Registering account {}", registration.login);

    let url = format!("{}/api/sign_up", base_url);
    let response = client.post(&url).json(&registration.to_json()).send().await?;
    let response = check_response(response).await?;
    Ok(response.json().await?)
}
