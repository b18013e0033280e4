//! Axum surface for the Slack OAuth callback.
//!
//! The host application constructs a [`CallbackConfig`] (credentials,
//! redirect URL, state predicate, and the success/error continuations),
//! wraps it in an [`AppState`], and mounts [`router::define_routes`] into
//! its own router. Request signature verification, token persistence, and
//! the authorization-initiation flow all belong to the host.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use web::{AppState, CallbackConfig};
//!
//! let config = CallbackConfig::new(
//!     client_id,
//!     client_secret,
//!     signing_secret,
//!     "https://example.com/auth/slack/callback",
//!     true,
//!     Arc::new(move |state| issued_states.contains(state)),
//!     Arc::new(MyHooks),
//! )?;
//! let callback_routes = web::router::define_routes(AppState::new(config)?);
//! let app = host_routes.merge(callback_routes);
//! ```

pub mod config;
pub(crate) mod controller;
pub mod router;

pub use config::{AuthorizeHooks, AuthorizeSuccess, CallbackConfig, StateValidator};

use std::sync::Arc;

use slack_auth::gateway::{OAuthAccess, SlackOAuthClient, SlackOAuthUrls};
use slack_auth::Error;

/// Shared state for the callback routes.
///
/// Read-only after construction and cloned into every request task.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CallbackConfig>,
    pub oauth: Arc<dyn OAuthAccess>,
}

impl AppState {
    /// Create state backed by a single long-lived Slack client.
    pub fn new(config: CallbackConfig) -> Result<Self, Error> {
        let oauth = SlackOAuthClient::new(SlackOAuthUrls::default())?;
        Ok(Self::with_oauth(config, Arc::new(oauth)))
    }

    /// Create state with an injected exchange client.
    pub fn with_oauth(config: CallbackConfig, oauth: Arc<dyn OAuthAccess>) -> Self {
        Self {
            config: Arc::new(config),
            oauth,
        }
    }
}
