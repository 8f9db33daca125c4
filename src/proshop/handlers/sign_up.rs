use crate::{
    firebase::Firebase,
    proshop::auth::{self, SignUpError},
    proshop::handlers::{valid_email, valid_password},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct SignUpRequest {
    email: String,
    password: String,
    #[serde(default)]
    display_name: Option<String>,
}

// passwords stay out of logs
impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .field("display_name", &self.display_name)
            .finish()
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    message: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[utoipa::path(
    post,
    path= "/auth/signup",
    request_body = SignUpRequest,
    responses (
        (status = 200, description = "Account created and token bundle issued", body = [SignUpResponse], content_type = "application/json"),
        (status = 400, description = "Malformed input or email already registered", body = String),
        (status = 500, description = "Account created but token issuance failed", body = String),
    ),
    tag= "auth"
)]
// axum handler for sign-up
#[instrument(skip(firebase))]
pub async fn sign_up(
    firebase: Extension<Arc<Firebase>>,
    payload: Option<Json<SignUpRequest>>,
) -> impl IntoResponse {
    let request: SignUpRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    let email = request.email.trim();

    // validate before any outbound call
    if !valid_email(email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    if !valid_password(&request.password) {
        return (StatusCode::BAD_REQUEST, "Invalid password".to_string()).into_response();
    }

    match auth::sign_up(
        &firebase,
        email,
        &request.password,
        request.display_name.as_deref(),
    )
    .await
    {
        Ok(session) => (
            StatusCode::OK,
            Json(SignUpResponse {
                message: "User created successfully".to_string(),
                id_token: session.tokens.id_token,
                refresh_token: session.tokens.refresh_token,
                expires_in: session.tokens.expires_in,
            }),
        )
            .into_response(),

        Err(SignUpError::DuplicateAccount) => (
            StatusCode::BAD_REQUEST,
            "Email is already registered".to_string(),
        )
            .into_response(),

        Err(SignUpError::TokenExchange { uid, source }) => {
            // The account exists; keep the uid in the log so an operator can reconcile.
            error!("account {uid} created but token exchange failed: {source:?}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "User created but failed to retrieve tokens".to_string(),
            )
                .into_response()
        }

        Err(SignUpError::Unavailable(error)) => {
            error!("sign-up failed: {error:?}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Signup failed".to_string(),
            )
                .into_response()
        }
    }
}
