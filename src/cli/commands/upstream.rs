use clap::{Arg, Command};

pub const ARG_TEE_TIMES_URL: &str = "tee-times-url";
pub const ARG_WEATHER_URL: &str = "weather-url";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_TEE_TIMES_URL)
                .long(ARG_TEE_TIMES_URL)
                .help("Tee time search API endpoint")
                .env("PROSHOP_TEE_TIMES_URL")
                .default_value("https://api.example.com/tee-times"),
        )
        .arg(
            Arg::new(ARG_WEATHER_URL)
                .long(ARG_WEATHER_URL)
                .help("Weather forecast API endpoint")
                .env("PROSHOP_WEATHER_URL")
                .default_value("https://api.example.com/weather"),
        )
}
