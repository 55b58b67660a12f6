//! HTTP client for the identity backend.
//!
//! Speaks the GoTrue password-grant surface: token, signup, recover, and the
//! OAuth authorize URL. Session verification and refresh stay backend-side;
//! credentials and tokens are never logged.

use serde_json::json;
use tracing::{debug, error};
use url::Url;

use super::types::{ProviderError, Session};
use crate::config::Config;

/// Client for a GoTrue-compatible auth API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    project_url: String,
    anon_key: String,
}

impl AuthClient {
    /// Creates a client for the configured identity backend.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            project_url: config.project_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.project_url)
    }

    /// Exchanges email/password for a session.
    ///
    /// # Errors
    /// Returns the backend's error (or the transport failure) on rejection.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        let response = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            response.json::<Session>().await.map_err(transport_error)
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Registers a new account. The confirmation email links back to
    /// `email_redirect_to`.
    ///
    /// # Errors
    /// Returns the backend's error (or the transport failure) on rejection.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        email_redirect_to: &str,
    ) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(self.endpoint("signup"))
            .query(&[("redirect_to", email_redirect_to)])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            debug!("signup accepted");
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Sends a password-recovery email linking back to `redirect_to`.
    ///
    /// # Errors
    /// Returns the backend's error (or the transport failure) on rejection.
    pub async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(self.endpoint("recover"))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            debug!("recovery email accepted");
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Builds the browser URL that starts an OAuth sign-in.
    ///
    /// The backend drives the whole exchange from there; the client never
    /// sees the resulting tokens.
    ///
    /// # Errors
    /// Returns an error if the configured project URL cannot form a URL.
    pub fn authorize_url(&self, provider: &str, redirect_to: &str) -> Result<String, ProviderError> {
        Url::parse_with_params(
            &self.endpoint("authorize"),
            &[("provider", provider), ("redirect_to", redirect_to)],
        )
        .map(String::from)
        .map_err(|e| {
            error!("invalid authorize url: {e}");
            ProviderError::new(e.to_string())
        })
    }

    async fn rejection(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(%status, "auth request rejected");
        ProviderError::from_body(&body)
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    error!("auth request failed: {err}");
    ProviderError::new(err.to_string())
}
