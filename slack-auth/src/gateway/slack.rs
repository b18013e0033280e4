//! Slack OAuth token-exchange client.
//!
//! Trades an authorization code (plus client credentials) for access tokens
//! via Slack's `oauth.v2.access` endpoint or the legacy `oauth.access`
//! endpoint. The exchange payload is provider-owned and passed through to
//! callers without interpretation beyond the `ok`/`error` envelope.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{Error, ErrorKind, OAuthErrorKind};

/// Request timeout applied to the shared exchange client.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for Slack OAuth endpoint URLs
#[derive(Debug, Clone)]
pub struct SlackOAuthUrls {
    pub access_url: String,
    pub v2_access_url: String,
}

impl Default for SlackOAuthUrls {
    fn default() -> Self {
        Self {
            access_url: "https://slack.com/api/oauth.access".to_string(),
            v2_access_url: "https://slack.com/api/oauth.v2.access".to_string(),
        }
    }
}

/// Fields sent to the token-exchange endpoint.
#[derive(Debug, Clone)]
pub struct AccessRequest {
    pub client_id: String,
    pub client_secret: SecretString,
    /// Authorization code from the callback. May be empty when the provider
    /// redirected without one; the exchange is still attempted and the
    /// provider rejects it.
    pub code: String,
    pub redirect_url: String,
}

/// Token-exchange response from Slack.
///
/// Only the envelope (`ok`, `error`) and the access token are typed; the
/// rest of the provider-owned payload is preserved in `extra` so callers
/// receive it untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Slack's authorization-code exchange operations.
///
/// Implemented by [`SlackOAuthClient`]; tests substitute a recording stub.
#[async_trait]
pub trait OAuthAccess: Send + Sync {
    /// Legacy `oauth.access` exchange.
    async fn oauth_access(&self, request: &AccessRequest) -> Result<AccessResponse, Error>;

    /// `oauth.v2.access` exchange.
    async fn oauth_v2_access(&self, request: &AccessRequest) -> Result<AccessResponse, Error>;
}

/// Slack OAuth client for exchanging authorization codes.
///
/// Holds a single long-lived HTTP client shared by all callback requests.
pub struct SlackOAuthClient {
    client: reqwest::Client,
    urls: SlackOAuthUrls,
}

impl SlackOAuthClient {
    /// Create a new Slack OAuth client with configurable URLs
    pub fn new(urls: SlackOAuthUrls) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self { client, urls })
    }

    async fn access(&self, url: &str, request: &AccessRequest) -> Result<AccessResponse, Error> {
        let params = [
            ("client_id", request.client_id.as_str()),
            ("client_secret", request.client_secret.expose_secret().as_str()),
            ("code", request.code.as_str()),
            ("redirect_url", request.redirect_url.as_str()),
        ];

        debug!("Exchanging authorization code at {}", url);

        let response = self
            .client
            .post(url)
            .form(&params)
            .send()
            .await
            .inspect_err(|e| warn!("Failed to send token exchange request: {:?}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .inspect_err(|e| warn!("Failed to read token exchange response: {:?}", e))?;

        if !status.is_success() {
            warn!("Token exchange failed with status {}", status);
            return Err(Error {
                source: Some(body.into()),
                error_kind: ErrorKind::OAuth(OAuthErrorKind::ExchangeFailed),
            });
        }

        let access: AccessResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse token exchange response: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
            }
        })?;

        // Slack reports exchange rejection as HTTP 200 with ok: false; the
        // raw body is carried so callers keep the provider's error detail.
        if !access.ok {
            warn!(
                "Slack rejected the token exchange: {}",
                access.error.as_deref().unwrap_or("unknown error")
            );
            return Err(Error {
                source: Some(body.into()),
                error_kind: ErrorKind::OAuth(OAuthErrorKind::ExchangeFailed),
            });
        }

        info!("Token exchange successful");
        Ok(access)
    }
}

#[async_trait]
impl OAuthAccess for SlackOAuthClient {
    async fn oauth_access(&self, request: &AccessRequest) -> Result<AccessResponse, Error> {
        self.access(&self.urls.access_url, request).await
    }

    async fn oauth_v2_access(&self, request: &AccessRequest) -> Result<AccessResponse, Error> {
        self.access(&self.urls.v2_access_url, request).await
    }
}
