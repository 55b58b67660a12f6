//! Effect handlers for the screen runtime.
//!
//! Pure async functions that call the identity provider and return the
//! resulting `UiEvent`. They do not mutate state; the reducer settles the
//! submission cycle when the event arrives.

use gatehouse_core::auth::{AuthClient, ProviderError};

use crate::events::{AuthUiEvent, UiEvent};

pub async fn sign_in(client: AuthClient, email: String, password: String) -> UiEvent {
    let result = client.sign_in_with_password(&email, &password).await;
    UiEvent::Auth(AuthUiEvent::SignInFinished(result))
}

pub async fn sign_up(
    client: AuthClient,
    email: String,
    password: String,
    email_redirect_to: String,
) -> UiEvent {
    let result = client.sign_up(&email, &password, &email_redirect_to).await;
    UiEvent::Auth(AuthUiEvent::SignUpFinished(result))
}

pub async fn password_reset(client: AuthClient, email: String, redirect_to: String) -> UiEvent {
    let result = client.reset_password_for_email(&email, &redirect_to).await;
    UiEvent::Auth(AuthUiEvent::ResetFinished(result))
}

/// Builds the authorize URL and hands the exchange to the browser. The
/// backend drives everything from there.
pub async fn google_oauth(client: AuthClient, redirect_to: String) -> UiEvent {
    let result = client
        .authorize_url("google", &redirect_to)
        .and_then(|url| {
            open::that(&url).map_err(|e| ProviderError::new(e.to_string()))
        });
    UiEvent::Auth(AuthUiEvent::OAuthFinished(result))
}
