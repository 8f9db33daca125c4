pub mod health;
pub use self::health::health;

pub mod sign_up;
pub use self::sign_up::sign_up;

pub mod sign_in;
pub use self::sign_in::sign_in;

pub mod tee_times;
pub use self::tee_times::tee_times;

pub mod weather;
pub use self::weather::weather;

// common functions for the handlers
use regex::Regex;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

pub fn valid_password(password: &str) -> bool {
    // passwords are opaque to this service, only emptiness is rejected here
    !password.trim().is_empty()
}

pub fn valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

pub fn valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}
