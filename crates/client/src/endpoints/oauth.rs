//! OAuth2 token endpoint.

use reqwest::{Client, StatusCode};
use santa_config::AuthConfig;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::endpoints::check_response;
use crate::endpoints::request::error_message;
use crate::error::{ClientError, Result};
use crate::models::TokenResponse;

/// Credentials presented to the token endpoint.
#[derive(Debug, Clone, Copy)]
pub enum Grant<'a> {
    /// Resource owner password credentials.
    Password {
        username: &'a str,
        password: &'a SecretString,
    },
    /// Exchange of a previously issued refresh token.
    RefreshToken { refresh_token: &'a SecretString },
}

impl Grant<'_> {
    fn grant_type(&self) -> &'static str {
        match self {
            Grant::Password { .. } => "password",
            Grant::RefreshToken { .. } => "refresh_token",
        }
    }
}

/// POST `{base_url}/oauth/token` and decode the token response.
///
/// HTTP 400 and 401 are the server's way of refusing the grant and map to
/// [`ClientError::AuthFailed`]. The decoded body is returned as-is; checking
/// it for completeness is the caller's job.
pub async fn request_token(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    grant: Grant<'_>,
) -> Result<TokenResponse> {
    debug!(grant_type = grant.grant_type(), "Requesting token");

    let url = format!("{}/oauth/token", base_url);
    let mut form: Vec<(&str, &str)> = vec![("grant_type", grant.grant_type())];
    match grant {
        Grant::Password { username, password } => {
            form.push(("username", username));
            form.push(("password", password.expose_secret()));
        }
        Grant::RefreshToken { refresh_token } => {
            form.push(("refresh_token", refresh_token.expose_secret()));
        }
    }
    form.push(("client_id", auth.client_id.as_str()));
    form.push(("scope", auth.scope.as_str()));

    let response = client.post(&url).form(&form).send().await?;

    if matches!(
        response.status(),
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED
    ) {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!(status, "Token endpoint refused the grant");
        return Err(ClientError::AuthFailed(error_message(&body)));
    }

    let response = check_response(response).await?;
    Ok(response.json::<TokenResponse>().await?)
}
