//! Booking data model, owned by the upcoming booking feature.
//!
//! These are passive schemas: the service documents them in the OpenAPI
//! components so clients can build against them, but no lifecycle logic runs
//! against them yet.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A golf course known to the tee-time search upstream.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct Course {
    pub course_id: String,
    pub name: String,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub slope: i32,
    pub lat: f64,
    pub lon: f64,
}

/// A bookable slot at a course.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct TeeTime {
    pub tee_time_id: String,
    pub course_id: String,
    pub date: String,
    pub time: String,
}

/// A reservation tying an account to a tee time.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct Booking {
    pub user_id: String,
    pub tee_time_id: String,
    pub method: BookingMethod,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingMethod {
    Cart,
    Walking,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booking_method_serializes_lowercase() {
        let booking = Booking {
            user_id: "uid-123".to_string(),
            tee_time_id: "tt-9".to_string(),
            method: BookingMethod::Walking,
        };
        let value = serde_json::to_value(&booking).expect("booking should serialize");
        assert_eq!(
            value,
            json!({"user_id": "uid-123", "tee_time_id": "tt-9", "method": "walking"})
        );
    }

    #[test]
    fn tee_time_round_trips() {
        let tee_time: TeeTime = serde_json::from_value(json!({
            "tee_time_id": "tt-9",
            "course_id": "c-1",
            "date": "2026-08-09",
            "time": "07:30"
        }))
        .expect("tee time should deserialize");
        assert_eq!(tee_time.course_id, "c-1");
    }
}
