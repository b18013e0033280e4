//! Handler configuration for the OAuth callback flow.

use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use secrecy::SecretString;
use url::Url;

use slack_auth::error::{config_error, ConfigErrorKind, Error, ErrorKind};
use slack_auth::gateway::AccessResponse;

/// Pure predicate over the callback's anti-forgery `state` value.
///
/// Expected to accept only values previously issued by the caller's
/// authorization-initiation flow.
pub type StateValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Successful authorization outcome handed to [`AuthorizeHooks::on_success`].
#[derive(Debug, Clone)]
pub struct AuthorizeSuccess {
    /// Token-exchange payload, passed through from the provider untouched.
    pub access: AccessResponse,
}

/// Caller-supplied continuations that complete the HTTP response.
///
/// Exactly one hook runs per callback request, exactly once; the `Response`
/// it returns is sent to the client unmodified. The handler itself never
/// writes a response body.
#[async_trait]
pub trait AuthorizeHooks: Send + Sync {
    /// Called with the exchange result after a successful token exchange.
    async fn on_success(&self, authorized: AuthorizeSuccess) -> Response;

    /// Called with the failure for a missing or rejected `state`, or for any
    /// exchange failure. The failure arrives unmodified.
    async fn on_error(&self, error: Error) -> Response;
}

/// Immutable configuration bundle for the callback handler.
///
/// Constructed once and shared read-only across all request tasks.
pub struct CallbackConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    /// Signing secret for the host's request-verification layer. The
    /// exchange logic never reads it.
    pub signing_secret: SecretString,
    redirect_url: Url,
    pub use_oauth_v2: bool,
    pub state_check: StateValidator,
    pub hooks: Arc<dyn AuthorizeHooks>,
}

impl std::fmt::Debug for CallbackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("signing_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("use_oauth_v2", &self.use_oauth_v2)
            .field("state_check", &"<fn>")
            .field("hooks", &"<hooks>")
            .finish()
    }
}

impl CallbackConfig {
    /// Create a new callback configuration.
    ///
    /// Fails when `redirect_url` is not a valid absolute http(s) URL; its
    /// path component is required to register the inbound route. No other
    /// field is validated.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: SecretString,
        signing_secret: SecretString,
        redirect_url: &str,
        use_oauth_v2: bool,
        state_check: StateValidator,
        hooks: Arc<dyn AuthorizeHooks>,
    ) -> Result<Self, Error> {
        let redirect_url = Url::parse(redirect_url).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::Config(ConfigErrorKind::InvalidRedirectUrl),
        })?;

        if redirect_url.scheme() != "http" && redirect_url.scheme() != "https" {
            return Err(config_error(
                ConfigErrorKind::InvalidRedirectUrl,
                "redirect URL must be an absolute http(s) URL",
            ));
        }

        Ok(Self {
            client_id: client_id.into(),
            client_secret,
            signing_secret,
            redirect_url,
            use_oauth_v2,
            state_check,
            hooks,
        })
    }

    /// The full redirect URL as configured.
    pub fn redirect_url(&self) -> &Url {
        &self.redirect_url
    }

    /// Path component of the redirect URL; the callback route registers here.
    pub fn redirect_path(&self) -> &str {
        self.redirect_url.path()
    }
}
