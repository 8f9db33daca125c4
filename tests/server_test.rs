//! Tests for the service-level routes: banner, health and OpenAPI document.

mod common;

use common::create_test_server;
use serde_json::Value;

#[tokio::test]
async fn test_banner() {
    let server = create_test_server("http://127.0.0.1:9099");

    let response = server.get("/").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "⛳");
}

#[tokio::test]
async fn test_health() {
    let server = create_test_server("http://127.0.0.1:9099");

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let x_app = response
        .headers()
        .get("X-App")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(x_app.starts_with(env!("CARGO_PKG_NAME")));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = create_test_server("http://127.0.0.1:9099");

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), 200);

    let doc: Value = response.json();
    assert_eq!(doc["info"]["title"], "proshop");
    for route in ["/auth/signup", "/auth/signin", "/tee-times", "/weather", "/health"] {
        assert!(
            doc["paths"].get(route).is_some(),
            "missing OpenAPI path: {route}"
        );
    }

    // The passive booking schema ships with the document for future clients.
    for schema in ["Course", "TeeTime", "Booking"] {
        assert!(
            doc["components"]["schemas"].get(schema).is_some(),
            "missing OpenAPI schema: {schema}"
        );
    }
}
