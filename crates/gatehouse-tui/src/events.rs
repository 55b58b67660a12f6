//! UI event types.
//!
//! Events are the reducer's only input: terminal input, timer ticks, and
//! provider results delivered through the runtime's inbox channel.

use crossterm::event::Event;
use gatehouse_core::auth::{ProviderError, Session};

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer tick (drives the spinner).
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// Async result from the identity provider.
    Auth(AuthUiEvent),
}

/// Results of provider calls.
///
/// One submission cycle produces exactly one of these; the reducer settles
/// the cycle (`loading = false`) when it arrives.
#[derive(Debug)]
pub enum AuthUiEvent {
    SignInFinished(Result<Session, ProviderError>),
    SignUpFinished(Result<(), ProviderError>),
    ResetFinished(Result<(), ProviderError>),
    OAuthFinished(Result<(), ProviderError>),
}
