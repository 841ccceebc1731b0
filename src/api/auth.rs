//! Client credentials authentication.
//!
//! Exchanges the application's own client ID and secret for a short-lived
//! bearer token. Such a token only reaches endpoints that do not touch
//! user data.

use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::Credentials;
use crate::error::{Result, SpotifyError};

/// Grant type sent to the token endpoint.
const GRANT_TYPE: &str = "client_credentials";

/// A bearer token returned by the accounts service.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The opaque token string.
    pub access_token: String,
    /// Token type, normally "Bearer".
    pub token_type: String,
    /// Lifetime in seconds from issue.
    pub expires_in: u64,
}

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_in: 0,
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Encode `client_id:client_secret` as a basic auth credential.
pub fn basic_credential(credentials: &Credentials) -> String {
    general_purpose::STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ))
}

/// Build the `Authorization: Bearer ...` header for Web API requests.
///
/// # Errors
///
/// Returns `Auth` if the token contains bytes not allowed in a header.
pub fn auth_header(token: &AccessToken) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.access_token))
        .map_err(|e| SpotifyError::Auth(format!("Unusable access token: {}", e)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Token endpoint client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Client,
    token_url: String,
}

impl AuthApi {
    /// Create a token client for the given endpoint.
    pub fn new<S: Into<String>>(client: Client, token_url: S) -> Self {
        Self {
            client,
            token_url: token_url.into(),
        }
    }

    /// Request an access token with the client credentials flow.
    ///
    /// # Errors
    ///
    /// Returns `Auth` if the service answers without an `access_token`,
    /// e.g. because the credentials were rejected.
    pub async fn request_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        debug!("POST {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                format!("Basic {}", basic_credential(credentials)),
            )
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("grant_type={}", GRANT_TYPE))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body).map_err(|_| {
            error!("Token endpoint returned a non-JSON body ({})", status);
            SpotifyError::Auth(format!("unexpected token response ({})", status))
        })?;

        let Some(access_token) = data.get("access_token").and_then(|t| t.as_str()) else {
            let reason = describe_token_error(&data).unwrap_or_else(|| status.to_string());
            error!("Token request rejected: {}", reason);
            return Err(SpotifyError::Auth(reason));
        };

        let token = AccessToken {
            access_token: access_token.to_string(),
            token_type: data
                .get("token_type")
                .and_then(|t| t.as_str())
                .unwrap_or("Bearer")
                .to_string(),
            expires_in: data.get("expires_in").and_then(|e| e.as_u64()).unwrap_or(0),
        };

        info!(
            "Authenticated with client credentials, token valid for {}s",
            token.expires_in
        );

        Ok(token)
    }
}

/// Render an OAuth error body such as
/// `{"error": "invalid_client", "error_description": "Invalid client"}`.
fn describe_token_error(data: &Value) -> Option<String> {
    let code = data.get("error").and_then(|e| e.as_str())?;
    match data.get("error_description").and_then(|d| d.as_str()) {
        Some(description) => Some(format!("{}: {}", code, description)),
        None => Some(code.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_credential() {
        let creds = Credentials::new("id", "secret");
        assert_eq!(basic_credential(&creds), "aWQ6c2VjcmV0");
    }

    #[test]
    fn test_auth_header() {
        let headers = auth_header(&AccessToken::new("abc123")).unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_auth_header_rejects_control_chars() {
        let result = auth_header(&AccessToken::new("bad\ntoken"));
        assert!(matches!(result, Err(SpotifyError::Auth(_))));
    }

    #[test]
    fn test_describe_token_error() {
        let body = json!({ "error": "invalid_client", "error_description": "Invalid client" });
        assert_eq!(
            describe_token_error(&body).as_deref(),
            Some("invalid_client: Invalid client")
        );
        assert_eq!(
            describe_token_error(&json!({ "error": "invalid_grant" })).as_deref(),
            Some("invalid_grant")
        );
        assert_eq!(describe_token_error(&json!({})), None);
    }

    #[test]
    fn test_token_debug_redacts() {
        let printed = format!("{:?}", AccessToken::new("abc123"));
        assert!(!printed.contains("abc123"));
    }
}
