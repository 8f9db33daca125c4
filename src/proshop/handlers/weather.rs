use crate::{
    cli::globals::GlobalArgs,
    proshop::handlers::{valid_latitude, valid_longitude},
    APP_USER_AGENT,
};
use anyhow::{Context, Result};
use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info_span, instrument, Instrument};
use utoipa::IntoParams;

#[derive(IntoParams, Deserialize, Debug)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
    /// Forecast date, e.g. 2026-08-09
    pub date: String,
}

#[utoipa::path(
    get,
    path= "/weather",
    params(WeatherQuery),
    responses (
        (status = 200, description = "Forecast for the given location and date", content_type = "application/json"),
        (status = 400, description = "Missing or invalid query parameters", body = String),
        (status = 502, description = "Weather API unreachable", body = String),
    ),
    tag= "weather"
)]
// axum handler for weather forecast, pass-through proxy
#[instrument(skip(globals))]
pub async fn weather(
    globals: Extension<GlobalArgs>,
    query: Option<Query<WeatherQuery>>,
) -> impl IntoResponse {
    let Some(Query(query)) = query else {
        return (
            StatusCode::BAD_REQUEST,
            "Missing or invalid query parameters".to_string(),
        )
            .into_response();
    };

    // validate before any outbound call
    if query.date.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Date is required".to_string()).into_response();
    }

    if !valid_latitude(query.lat) || !valid_longitude(query.lon) {
        return (
            StatusCode::BAD_REQUEST,
            "Error in finding location".to_string(),
        )
            .into_response();
    }

    match fetch_forecast(&globals, &query).await {
        Ok((status, body)) if status.is_success() => (status, Json(body)).into_response(),

        // upstream answered with an error, hand its status through
        Ok((status, _)) => (status, "Unable to fetch weather data".to_string()).into_response(),

        Err(error) => {
            error!("weather lookup failed: {error:?}");

            (
                StatusCode::BAD_GATEWAY,
                "Weather service unavailable".to_string(),
            )
                .into_response()
        }
    }
}

async fn fetch_forecast(globals: &GlobalArgs, query: &WeatherQuery) -> Result<(StatusCode, Value)> {
    let client = Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(Duration::from_secs(5))
        .build()?;

    let span = info_span!(
        "weather.fetch",
        http.method = "GET",
        url = %globals.weather_url
    );
    let response = client
        .get(&globals.weather_url)
        .query(&[("lat", query.lat), ("lon", query.lon)])
        .query(&[("date", query.date.as_str())])
        .send()
        .instrument(span)
        .await
        .context("failed to reach the weather API")?;

    let status = response.status();
    if !status.is_success() {
        return Ok((status, Value::Null));
    }

    let body = response
        .json::<Value>()
        .await
        .context("weather API returned a non-JSON body")?;

    Ok((status, body))
}
