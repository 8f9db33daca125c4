//! Client for the identity provider REST API.
//!
//! Accounts and credentials are owned by the provider; this module only
//! performs the two calls the service needs (`accounts:signUp` and
//! `accounts:signInWithPassword`) and translates the provider responses into
//! [`ProviderError`]. Each call is a single outbound request, no retries.

use crate::APP_USER_AGENT;
use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info_span, instrument, Instrument};
use url::Url;

/// Outcome of a provider call, kept three-way internally so operators can
/// tell a network failure from a credential failure in the logs. The HTTP
/// surface maps these many-to-one onto external statuses.
#[derive(Debug)]
pub enum ProviderError {
    /// The provider already holds an account for this email.
    EmailExists,
    /// The provider rejected the email/password pair. Covers wrong password,
    /// unknown account and disabled account alike.
    InvalidCredentials,
    /// The provider is unreachable or answered with an unexpected shape.
    Unavailable(anyhow::Error),
}

impl ProviderError {
    #[must_use]
    pub fn into_report(self) -> anyhow::Error {
        match self {
            Self::EmailExists => anyhow!("email is already registered with the identity provider"),
            Self::InvalidCredentials => anyhow!("credentials rejected by the identity provider"),
            Self::Unavailable(error) => error,
        }
    }
}

/// Account summary echoed by the provider on account creation.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccount {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Token bundle plus the profile fields echoed by the provider on a
/// successful password sign-in. `expires_in` is seconds, as the string the
/// provider sends.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub local_id: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignUpPayload<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignInPayload<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Build the URL for an identity toolkit account operation.
/// # Errors
/// Returns an error if `base_url` cannot be parsed, has no host, or uses an unsupported scheme.
pub fn endpoint_url(base_url: &str, operation: &str) -> Result<String> {
    let url = Url::parse(base_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    Ok(format!("{scheme}://{host}:{port}/v1/accounts:{operation}"))
}

/// Identity provider client. Constructed once at startup from [`crate::cli::globals::GlobalArgs`]
/// and shared read-only between requests.
pub struct Firebase {
    base_url: String,
    api_key: SecretString,
    client: Client,
}

impl Firebase {
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: String, api_key: SecretString) -> Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()
            .context("failed to build identity provider HTTP client")?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Create a new account with the provider.
    ///
    /// # Errors
    /// Returns [`ProviderError::EmailExists`] when the email is already
    /// registered, [`ProviderError::Unavailable`] on any other failure.
    #[instrument(skip(self, password))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<ProviderAccount, ProviderError> {
        let url = endpoint_url(&self.base_url, "signUp").map_err(ProviderError::Unavailable)?;

        let payload = SignUpPayload {
            email,
            password,
            display_name,
            return_secure_token: true,
        };

        let span = info_span!("identity.sign_up", http.method = "POST", url = %url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&payload)
            .send()
            .instrument(span)
            .await
            .map_err(|e| {
                ProviderError::Unavailable(
                    anyhow!(e).context("failed to send account creation request"),
                )
            })?;

        if response.status().is_success() {
            return response.json::<ProviderAccount>().await.map_err(|e| {
                ProviderError::Unavailable(
                    anyhow!(e).context("unexpected account creation response"),
                )
            });
        }

        let (status, message) = error_body(response).await;
        if status.is_client_error() && message.starts_with("EMAIL_EXISTS") {
            return Err(ProviderError::EmailExists);
        }

        Err(ProviderError::Unavailable(anyhow!(
            "account creation failed with status {status}: {message}"
        )))
    }

    /// Verify an email/password pair and mint a token bundle.
    ///
    /// # Errors
    /// Returns [`ProviderError::InvalidCredentials`] on any provider-side
    /// rejection, [`ProviderError::Unavailable`] on transport failures or
    /// unexpected responses.
    #[instrument(skip(self, password))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenBundle, ProviderError> {
        let url = endpoint_url(&self.base_url, "signInWithPassword")
            .map_err(ProviderError::Unavailable)?;

        let payload = SignInPayload {
            email,
            password,
            return_secure_token: true,
        };

        let span = info_span!("identity.sign_in", http.method = "POST", url = %url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&payload)
            .send()
            .instrument(span)
            .await
            .map_err(|e| {
                ProviderError::Unavailable(anyhow!(e).context("failed to send sign-in request"))
            })?;

        if response.status().is_success() {
            return response.json::<TokenBundle>().await.map_err(|e| {
                ProviderError::Unavailable(anyhow!(e).context("unexpected sign-in response"))
            });
        }

        let (status, message) = error_body(response).await;
        if status.is_client_error() {
            // Logged for operators; callers only ever see "invalid credentials".
            debug!("credentials rejected: {message}");
            return Err(ProviderError::InvalidCredentials);
        }

        Err(ProviderError::Unavailable(anyhow!(
            "password sign-in failed with status {status}: {message}"
        )))
    }
}

async fn error_body(response: reqwest::Response) -> (StatusCode, String) {
    let status = response.status();
    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_default();

    (status, message)
}
