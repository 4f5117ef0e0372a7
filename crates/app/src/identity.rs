//! Hosted identity provider client for customer accounts.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for connecting to the identity provider.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Provider base address, e.g. `"https://auth.example.com"`.
    pub base_url: String,

    /// Publishable API key sent with every request.
    pub api_key: String,
}

/// HTTP client for the hosted identity provider.
///
/// The storefront never stores passwords. Sign-up and sign-in are delegated
/// to the provider and only the returned account key is kept locally, as the
/// external key of a customer person row.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    config: IdentityConfig,
    http: Client,
}

impl IdentityClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Create a provider account for `email` and return its session.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the provider rejects the
    /// credentials, e.g. a duplicate email or a password below its policy.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountSession, IdentityError> {
        let url = format!("{}/auth/v1/signup", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&Credentials { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let parsed: SignUpResponse = response.json().await?;

        Ok(AccountSession {
            account_key: parsed.id,
            email: parsed.email,
        })
    }

    /// Exchange credentials for the account they belong to.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the provider refuses the
    /// credentials.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountSession, IdentityError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&Credentials { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let parsed: SignInResponse = response.json().await?;

        Ok(AccountSession {
            account_key: parsed.user.id,
            email: parsed.user.email,
        })
    }

    async fn rejection(response: reqwest::Response) -> IdentityError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();

        IdentityError::Rejected { status, message }
    }
}

/// An authenticated account as reported by the provider.
#[derive(Debug, Clone)]
pub struct AccountSession {
    /// Provider-side account identifier, stored as the customer's external key.
    pub account_key: String,

    /// Canonical email on the account.
    pub email: String,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
    id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    user: SignUpResponse,
}

/// Errors that can occur when communicating with the identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response.
    #[error("identity provider rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_response_reads_account_fields() {
        let body = r#"{
            "id": "9b2f6e58-1df5-4f4c-a2da-0f4f2e6c9a11",
            "aud": "authenticated",
            "email": "ana.souza@example.com",
            "created_at": "2025-06-05T12:00:00Z"
        }"#;

        let parsed: SignUpResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.id, "9b2f6e58-1df5-4f4c-a2da-0f4f2e6c9a11");
        assert_eq!(parsed.email, "ana.souza@example.com");
    }

    #[test]
    fn sign_in_response_reads_the_nested_account() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": "9b2f6e58-1df5-4f4c-a2da-0f4f2e6c9a11",
                "email": "ana.souza@example.com"
            }
        }"#;

        let parsed: SignInResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.user.id, "9b2f6e58-1df5-4f4c-a2da-0f4f2e6c9a11");
        assert_eq!(parsed.user.email, "ana.souza@example.com");
    }
}
