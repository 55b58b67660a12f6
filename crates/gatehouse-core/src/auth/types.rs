//! Session and provider error types.

use std::fmt;

use serde::Deserialize;

/// Session established by a successful password grant.
///
/// Refresh and verification are the backend's responsibility; this is only
/// the payload handed to the caller that observed the sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp the access token expires at.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The identity a session belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Failure surfaced by the identity backend.
///
/// The screen only consumes the message; everything else about the response
/// stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub message: Option<String>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Extracts the backend's message from a JSON error body.
    ///
    /// GoTrue responses carry the message under `error_description`, `msg`,
    /// or `error` depending on the endpoint; the first present wins. A
    /// non-JSON body yields an error with no message.
    pub fn from_body(body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error_description", "msg", "error"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
            });

        Self { message }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "authentication request failed"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_prefers_error_description() {
        let error = ProviderError::from_body(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(error.message.as_deref(), Some("Invalid login credentials"));
    }

    #[test]
    fn test_from_body_reads_msg() {
        let error = ProviderError::from_body(r#"{"code":422,"msg":"User already registered"}"#);
        assert_eq!(error.message.as_deref(), Some("User already registered"));
    }

    #[test]
    fn test_from_body_non_json_has_no_message() {
        let error = ProviderError::from_body("<html>502 Bad Gateway</html>");
        assert!(error.message.is_none());
    }

    #[test]
    fn test_session_deserializes_token_response() {
        let session: Session = serde_json::from_str(
            r#"{
                "access_token": "at-123",
                "token_type": "bearer",
                "expires_in": 3600,
                "expires_at": 1754600000,
                "refresh_token": "rt-456",
                "user": {"id": "u-1", "email": "a@b.com", "role": "authenticated"}
            }"#,
        )
        .unwrap();

        assert_eq!(session.access_token, "at-123");
        assert_eq!(session.refresh_token.as_deref(), Some("rt-456"));
        assert_eq!(session.expires_at, Some(1_754_600_000));
        assert_eq!(
            session.user.and_then(|u| u.email).as_deref(),
            Some("a@b.com")
        );
    }
}
