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
pub struct TeeTimeQuery {
    /// Desired date, e.g. 2026-08-09
    pub date: String,
    /// Earliest acceptable start time, e.g. 07:30
    pub time: String,
    pub lat: f64,
    pub lon: f64,
    /// Search radius in miles
    #[serde(default = "default_proximity")]
    pub proximity: u32,
}

const fn default_proximity() -> u32 {
    25
}

#[utoipa::path(
    get,
    path= "/tee-times",
    params(TeeTimeQuery),
    responses (
        (status = 200, description = "Tee times found by the search upstream", content_type = "application/json"),
        (status = 400, description = "Missing or invalid query parameters", body = String),
        (status = 502, description = "Tee time search API unreachable", body = String),
    ),
    tag= "tee-times"
)]
// axum handler for tee time search, pass-through proxy
#[instrument(skip(globals))]
pub async fn tee_times(
    globals: Extension<GlobalArgs>,
    query: Option<Query<TeeTimeQuery>>,
) -> impl IntoResponse {
    let Some(Query(query)) = query else {
        return (
            StatusCode::BAD_REQUEST,
            "Missing or invalid query parameters".to_string(),
        )
            .into_response();
    };

    // validate before any outbound call
    if query.date.trim().is_empty() || query.time.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Date and time are required".to_string(),
        )
            .into_response();
    }

    if !valid_latitude(query.lat) || !valid_longitude(query.lon) {
        return (
            StatusCode::BAD_REQUEST,
            "Error in finding location".to_string(),
        )
            .into_response();
    }

    match fetch_tee_times(&globals, &query).await {
        Ok((status, body)) if status.is_success() => (status, Json(body)).into_response(),

        // upstream answered with an error, hand its status through
        Ok((status, _)) => (status, "Unable to fetch tee times".to_string()).into_response(),

        Err(error) => {
            error!("tee time lookup failed: {error:?}");

            (
                StatusCode::BAD_GATEWAY,
                "Tee time service unavailable".to_string(),
            )
                .into_response()
        }
    }
}

async fn fetch_tee_times(globals: &GlobalArgs, query: &TeeTimeQuery) -> Result<(StatusCode, Value)> {
    let client = Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(Duration::from_secs(5))
        .build()?;

    let span = info_span!(
        "tee_times.fetch",
        http.method = "GET",
        url = %globals.tee_times_url
    );
    let response = client
        .get(&globals.tee_times_url)
        .query(&[("date", query.date.as_str()), ("time", query.time.as_str())])
        .query(&[("lat", query.lat), ("lon", query.lon)])
        .query(&[("proximity", query.proximity)])
        .send()
        .instrument(span)
        .await
        .context("failed to reach the tee time search API")?;

    let status = response.status();
    if !status.is_success() {
        return Ok((status, Value::Null));
    }

    let body = response
        .json::<Value>()
        .await
        .context("tee time search API returned a non-JSON body")?;

    Ok((status, body))
}
