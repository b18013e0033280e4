//! HTTP gateways to the identity provider.

mod slack;

pub use slack::{AccessRequest, AccessResponse, OAuthAccess, SlackOAuthClient, SlackOAuthUrls};
