use secrecy::SecretString;

/// Process-wide configuration, constructed once at startup and read-only
/// afterwards. Handed to the router via an `Extension` layer instead of
/// living in ambient global state.
#[derive(Clone)]
pub struct GlobalArgs {
    pub identity_url: String,
    pub firebase_api_key: SecretString,
    pub tee_times_url: String,
    pub weather_url: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(
        identity_url: String,
        firebase_api_key: SecretString,
        tee_times_url: String,
        weather_url: String,
    ) -> Self {
        Self {
            identity_url,
            firebase_api_key,
            tee_times_url,
            weather_url,
        }
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("identity_url", &self.identity_url)
            .field("firebase_api_key", &"***")
            .field("tee_times_url", &self.tee_times_url)
            .field("weather_url", &self.weather_url)
            .finish()
    }
}
