//! # slack-auth
//!
//! Authentication plumbing for the Slack integration:
//! - Error types shared across the workspace
//! - Slack OAuth 2.0 token-exchange gateway (`oauth.v2.access` and the
//!   legacy `oauth.access` endpoint)
//!
//! The axum-facing callback surface lives in the `web` crate and builds on
//! the [`gateway::OAuthAccess`] trait exported here.

pub mod error;
pub mod gateway;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
