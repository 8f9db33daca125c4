//! Common test utilities for endpoint tests

use axum_test::TestServer;
use proshop::{cli::globals::GlobalArgs, firebase::Firebase, proshop::router};
use secrecy::SecretString;
use std::sync::Arc;

/// Build a test server whose identity provider and proxy upstreams all point
/// at `base_url` (normally a wiremock `MockServer`).
pub fn create_test_server(base_url: &str) -> TestServer {
    let globals = GlobalArgs::new(
        base_url.to_string(),
        SecretString::from("test-key".to_string()),
        format!("{base_url}/tee-times"),
        format!("{base_url}/weather"),
    );

    let firebase = Arc::new(
        Firebase::new(
            globals.identity_url.clone(),
            globals.firebase_api_key.clone(),
        )
        .expect("identity client should build"),
    );

    TestServer::new(router(&globals, firebase)).expect("test server should start")
}
