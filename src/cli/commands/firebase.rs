use clap::{Arg, Command};

pub const ARG_FIREBASE_API_KEY: &str = "firebase-api-key";
pub const ARG_IDENTITY_URL: &str = "identity-url";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_FIREBASE_API_KEY)
                .long(ARG_FIREBASE_API_KEY)
                .help("Web API key used to call the identity provider REST API")
                .env("PROSHOP_FIREBASE_API_KEY")
                .required(true),
        )
        .arg(
            Arg::new(ARG_IDENTITY_URL)
                .long(ARG_IDENTITY_URL)
                .help("Base URL of the identity provider, example: http://127.0.0.1:9099 when using an emulator")
                .env("PROSHOP_IDENTITY_URL")
                .default_value("https://identitytoolkit.googleapis.com"),
        )
}
