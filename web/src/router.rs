use crate::{controller::oauth_controller, AppState};
use axum::{routing::get, Router};
use log::info;

/// Build the router for the callback surface.
///
/// The callback answers GET requests at the path component of the configured
/// redirect URL; everything else is left to the host router this is merged
/// into.
pub fn define_routes(app_state: AppState) -> Router {
    Router::new().merge(oauth_routes(app_state))
}

fn oauth_routes(app_state: AppState) -> Router {
    let path = app_state.config.redirect_path().to_string();
    info!("Registering OAuth callback route at {}", path);

    Router::new()
        .route(&path, get(oauth_controller::callback))
        .with_state(app_state)
}
