use serde::Deserialize;
use tracing::warn;

use crate::api::error::ApiError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Verified identity returned by the OAuth provider
#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

#[derive(Deserialize)]
struct TokenInfo {
    aud: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

/// Verify a Google id token against the tokeninfo endpoint.
///
/// Google validates the signature and expiry server-side; we additionally
/// require the token's audience to match our client id.
pub async fn verify_google_token(
    http: &reqwest::Client,
    client_id: &str,
    id_token: &str,
) -> Result<GoogleIdentity, ApiError> {
    let response = http
        .get(TOKENINFO_URL)
        .query(&[("id_token", id_token)])
        .send()
        .await
        .map_err(|e| {
            warn!("Google tokeninfo request failed: {}", e);
            ApiError::unauthorized("Failed to authenticate with Google")
        })?;

    if !response.status().is_success() {
        warn!("Google rejected id token: status={}", response.status());
        return Err(ApiError::unauthorized("Failed to authenticate with Google"));
    }

    let info: TokenInfo = response.json().await.map_err(|e| {
        warn!("Malformed tokeninfo response: {}", e);
        ApiError::unauthorized("Failed to authenticate with Google")
    })?;

    if info.aud != client_id {
        warn!("Google token audience mismatch");
        return Err(ApiError::unauthorized("Failed to authenticate with Google"));
    }

    let name = info.name.unwrap_or_else(|| info.email.clone());
    Ok(GoogleIdentity {
        email: info.email,
        name,
        picture: info.picture,
    })
}
