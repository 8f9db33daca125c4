//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the appropriate
//! action, such as starting the API server with its full configuration state.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{firebase, upstream};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let firebase_api_key = matches
        .get_one::<String>(firebase::ARG_FIREBASE_API_KEY)
        .cloned()
        .context("missing required argument: --firebase-api-key")?;

    let identity_url = matches
        .get_one::<String>(firebase::ARG_IDENTITY_URL)
        .cloned()
        .context("missing required argument: --identity-url")?;

    let tee_times_url = matches
        .get_one::<String>(upstream::ARG_TEE_TIMES_URL)
        .cloned()
        .context("missing required argument: --tee-times-url")?;

    let weather_url = matches
        .get_one::<String>(upstream::ARG_WEATHER_URL)
        .cloned()
        .context("missing required argument: --weather-url")?;

    Ok(Action::Server(Args {
        port,
        identity_url,
        firebase_api_key: SecretString::from(firebase_api_key),
        tee_times_url,
        weather_url,
    }))
}
