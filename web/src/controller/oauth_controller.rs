//! Controller for the Slack OAuth callback flow.
//!
//! Handles the provider redirect after the user authorizes the integration:
//! validates the anti-forgery `state`, exchanges the authorization `code`
//! for tokens, and hands the outcome to the caller-supplied continuations.
//! Note: the callback arrives via a browser redirect, so inbound
//! authentication is limited to whatever request verification the host
//! router performs before this handler runs.

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use slack_auth::error::{oauth_error, OAuthErrorKind};
use slack_auth::gateway::AccessRequest;

use crate::config::AuthorizeSuccess;
use crate::AppState;

/// Query parameters for the OAuth callback
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
}

/// GET handler for the redirect URL's path.
///
/// Exactly one of the configured hooks runs per request; its `Response` is
/// returned unmodified.
pub async fn callback(
    State(app_state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    let config = &app_state.config;

    let state = match params.state {
        Some(state) if !state.is_empty() => state,
        _ => {
            return config
                .hooks
                .on_error(oauth_error(
                    OAuthErrorKind::MissingState,
                    "state query parameter is not defined",
                ))
                .await;
        }
    };

    if !(config.state_check)(&state) {
        return config
            .hooks
            .on_error(oauth_error(OAuthErrorKind::InvalidState, "invalid state"))
            .await;
    }

    // An absent code is exchanged as-is; the provider rejects it and the
    // failure flows through on_error like any other rejection.
    let request = AccessRequest {
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        code: params.code.unwrap_or_default(),
        redirect_url: config.redirect_url().to_string(),
    };

    let result = if config.use_oauth_v2 {
        app_state.oauth.oauth_v2_access(&request).await
    } else {
        app_state.oauth.oauth_access(&request).await
    };

    match result {
        Ok(access) => {
            config
                .hooks
                .on_success(AuthorizeSuccess { access })
                .await
        }
        Err(error) => config.hooks.on_error(error).await,
    }
}
