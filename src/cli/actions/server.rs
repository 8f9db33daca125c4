use crate::{cli::globals::GlobalArgs, proshop};
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub identity_url: String,
    pub firebase_api_key: SecretString,
    pub tee_times_url: String,
    pub weather_url: String,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the identity provider client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let globals = GlobalArgs::new(
        args.identity_url,
        args.firebase_api_key,
        args.tee_times_url,
        args.weather_url,
    );

    debug!("Global args: {:?}", globals);

    proshop::new(args.port, &globals).await
}
