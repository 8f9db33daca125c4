//! # ProShop API
//!
//! Backend for the ProShop app. The service is a thin HTTP layer in front of
//! three external collaborators:
//!
//! - a managed identity provider (Firebase-style identity toolkit REST API)
//!   that owns accounts and issues token bundles,
//! - a tee-time search API,
//! - a weather forecast API.
//!
//! ## Authentication
//!
//! Accounts and passwords live entirely in the identity provider. Sign-up
//! creates the account and immediately exchanges the same credentials for a
//! token bundle so clients need no second round trip; sign-in verifies
//! credentials and returns the bundle plus the public profile. Every sign-in
//! failure is reported as a uniform `401 Unauthorized` so callers cannot
//! discover which emails are registered.
//!
//! ## Proxies
//!
//! `/tee-times` and `/weather` validate their query parameters and pass the
//! request through to the configured upstream, returning the upstream body
//! and status unchanged.

pub mod cli;
pub mod firebase;
pub mod proshop;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
