//! Sign-up and sign-in flows on top of the identity provider client.
//!
//! Sign-up creates the account and then immediately exchanges the same
//! credentials for a token bundle so clients need no second round trip. The
//! provider exposes no compensating delete, so a token failure after account
//! creation is reported as [`SignUpError::TokenExchange`] instead of being
//! rolled back or hidden.

use crate::firebase::{Firebase, ProviderAccount, ProviderError, TokenBundle};
use anyhow::anyhow;
use tracing::instrument;

/// Account plus the token bundle minted right after its creation.
#[derive(Debug)]
pub struct NewSession {
    pub account: ProviderAccount,
    pub tokens: TokenBundle,
}

#[derive(Debug)]
pub enum SignUpError {
    /// The email is already registered; no token exchange was attempted.
    DuplicateAccount,
    /// The account was created but the follow-up token exchange failed. The
    /// account keeps existing; a retried sign-up with the same email will
    /// report [`SignUpError::DuplicateAccount`].
    TokenExchange { uid: String, source: anyhow::Error },
    /// The provider rejected or never received the account creation call.
    Unavailable(anyhow::Error),
}

#[derive(Debug)]
pub enum SignInError {
    /// Wrong password, unknown account or disabled account. Callers must not
    /// be able to tell these apart.
    Unauthorized,
    /// The provider is unreachable or answered with an unexpected shape.
    Unavailable(anyhow::Error),
}

/// Create an account, then mint a token bundle for it.
///
/// # Errors
/// See [`SignUpError`].
#[instrument(skip(firebase, password))]
pub async fn sign_up(
    firebase: &Firebase,
    email: &str,
    password: &str,
    display_name: Option<&str>,
) -> Result<NewSession, SignUpError> {
    let account = match firebase.sign_up(email, password, display_name).await {
        Ok(account) => account,
        Err(ProviderError::EmailExists) => return Err(SignUpError::DuplicateAccount),
        Err(ProviderError::InvalidCredentials) => {
            return Err(SignUpError::Unavailable(anyhow!(
                "account creation rejected by the identity provider"
            )))
        }
        Err(ProviderError::Unavailable(error)) => return Err(SignUpError::Unavailable(error)),
    };

    // The account exists from here on; surface token failures as partial success.
    match firebase.sign_in_with_password(email, password).await {
        Ok(tokens) => Ok(NewSession { account, tokens }),
        Err(error) => Err(SignUpError::TokenExchange {
            uid: account.local_id,
            source: error.into_report(),
        }),
    }
}

/// Verify credentials and return a token bundle plus the account profile.
///
/// # Errors
/// See [`SignInError`].
#[instrument(skip(firebase, password))]
pub async fn sign_in(
    firebase: &Firebase,
    email: &str,
    password: &str,
) -> Result<TokenBundle, SignInError> {
    match firebase.sign_in_with_password(email, password).await {
        Ok(tokens) => Ok(tokens),
        Err(ProviderError::InvalidCredentials | ProviderError::EmailExists) => {
            Err(SignInError::Unauthorized)
        }
        Err(ProviderError::Unavailable(error)) => Err(SignInError::Unavailable(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn firebase(base_url: String) -> Firebase {
        Firebase::new(base_url, SecretString::from("test-key".to_string()))
            .expect("client should build")
    }

    fn signup_body() -> serde_json::Value {
        json!({
            "localId": "uid-123",
            "email": "golfer@example.com",
            "idToken": "signup-token",
            "refreshToken": "signup-refresh",
            "expiresIn": "3600"
        })
    }

    fn signin_body() -> serde_json::Value {
        json!({
            "localId": "uid-123",
            "email": "golfer@example.com",
            "displayName": "Golfer",
            "idToken": "token",
            "refreshToken": "refresh",
            "expiresIn": "3600",
            "registered": true
        })
    }

    #[tokio::test]
    async fn sign_up_mints_tokens() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(signup_body()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(signin_body()))
            .expect(1)
            .mount(&server)
            .await;

        let session = sign_up(
            &firebase(server.uri()),
            "golfer@example.com",
            "secret",
            Some("Golfer"),
        )
        .await
        .map_err(|e| anyhow!("{e:?}"))?;

        assert_eq!(session.account.local_id, "uid-123");
        assert!(!session.tokens.id_token.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_sign_up_skips_token_exchange() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "EMAIL_EXISTS"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        // The token exchange must never be attempted for a duplicate email.
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(signin_body()))
            .expect(0)
            .mount(&server)
            .await;

        let result = sign_up(&firebase(server.uri()), "golfer@example.com", "secret", None).await;

        assert!(matches!(result, Err(SignUpError::DuplicateAccount)));
        Ok(())
    }

    #[tokio::test]
    async fn token_failure_after_creation_is_partial_success() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(signup_body()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let result = sign_up(&firebase(server.uri()), "golfer@example.com", "secret", None).await;

        match result {
            Err(SignUpError::TokenExchange { uid, .. }) => assert_eq!(uid, "uid-123"),
            other => panic!("expected TokenExchange, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn sign_in_failures_collapse_to_unauthorized() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        for provider_message in ["INVALID_PASSWORD", "EMAIL_NOT_FOUND"] {
            let _mock = Mock::given(method("POST"))
                .and(path("/v1/accounts:signInWithPassword"))
                .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                    "error": {"code": 400, "message": provider_message}
                })))
                .expect(1)
                .mount_as_scoped(&server)
                .await;

            let result = sign_in(&firebase(server.uri()), "golfer@example.com", "secret").await;

            assert!(matches!(result, Err(SignInError::Unauthorized)));
        }
        Ok(())
    }
}
