use crate::{
    firebase::Firebase,
    proshop::auth::{self, SignInError},
    proshop::handlers::{valid_email, valid_password},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}

// passwords stay out of logs
impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    email: String,
    name: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user: UserProfile,
}

#[utoipa::path(
    post,
    path= "/auth/signin",
    request_body = SignInRequest,
    responses (
        (status = 200, description = "Credentials verified, token bundle issued", body = [SignInResponse], content_type = "application/json"),
        (status = 401, description = "Unauthorized", body = String),
    ),
    tag= "auth"
)]
// axum handler for sign-in
#[instrument(skip(firebase))]
pub async fn sign_in(
    firebase: Extension<Arc<Firebase>>,
    payload: Option<Json<SignInRequest>>,
) -> impl IntoResponse {
    let request: SignInRequest = match payload {
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

    match auth::sign_in(&firebase, email, &request.password).await {
        Ok(tokens) => (
            StatusCode::OK,
            Json(SignInResponse {
                id_token: tokens.id_token,
                refresh_token: tokens.refresh_token,
                expires_in: tokens.expires_in,
                user: UserProfile {
                    email: tokens.email,
                    name: tokens.display_name.unwrap_or_default(),
                },
            }),
        )
            .into_response(),

        // One body for every failure so callers cannot probe which emails exist.
        Err(SignInError::Unauthorized) => {
            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()).into_response()
        }

        Err(SignInError::Unavailable(error)) => {
            error!("sign-in failed upstream: {error:?}");

            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()).into_response()
        }
    }
}
