use crate::{
    cli::globals::GlobalArgs,
    firebase::Firebase,
    proshop::handlers::{
        health, health::__path_health, sign_in, sign_in::__path_sign_in, sign_up,
        sign_up::__path_sign_up, tee_times, tee_times::__path_tee_times, weather,
        weather::__path_weather,
    },
};
use anyhow::Result;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method, Request,
    },
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub(crate) mod handlers;
pub mod models;

#[derive(OpenApi)]
#[openapi(
    paths(health, sign_up, sign_in, tee_times, weather),
    components(schemas(
        health::Health,
        sign_up::SignUpRequest,
        sign_up::SignUpResponse,
        sign_in::SignInRequest,
        sign_in::SignInResponse,
        sign_in::UserProfile,
        models::Course,
        models::TeeTime,
        models::Booking,
        models::BookingMethod
    )),
    tags(
        (name = "proshop", description = "Tee times, weather and authentication for the ProShop app")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the application router. Configuration and the identity provider
/// client ride along as extensions, constructed by the caller.
#[must_use]
pub fn router(globals: &GlobalArgs, firebase: Arc<Firebase>) -> Router {
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "⛳" }))
        .route("/auth/signup", post(handlers::sign_up))
        .route("/auth/signin", post(handlers::sign_in))
        .route("/tee-times", get(handlers::tee_times))
        .route("/weather", get(handlers::weather))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(firebase))
                .layer(Extension(globals.clone())),
        )
        .route("/health", get(handlers::health).options(handlers::health))
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, globals: &GlobalArgs) -> Result<()> {
    let firebase = Arc::new(Firebase::new(
        globals.identity_url.clone(),
        globals.firebase_api_key.clone(),
    )?);

    let app = router(globals, firebase);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
