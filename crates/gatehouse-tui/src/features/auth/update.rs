//! Auth feature reducer.
//!
//! Handles form editing, submission, and provider result processing. All
//! state mutations for the screen happen here; network work is expressed as
//! effects for the runtime to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gatehouse_core::config::Config;
use gatehouse_core::validate::{AuthMode, FieldErrors, validate};

use super::messages;
use super::state::ScreenState;
use crate::effects::UiEffect;
use crate::events::AuthUiEvent;

/// Handles a key press on the screen.
///
/// While a submission is in flight (`loading`), every input except quitting
/// is ignored; this is the screen's only submission gate.
pub fn handle_key(screen: &mut ScreenState, config: &Config, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit always works; an in-flight provider call is abandoned, not cancelled.
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return vec![UiEffect::Quit];
    }

    if screen.loading {
        return vec![];
    }

    match key.code {
        KeyCode::Enter => submit(screen, config),
        KeyCode::Tab | KeyCode::Down => {
            screen.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus_prev();
            vec![]
        }
        KeyCode::Char('t') if ctrl => {
            screen.toggle_mode();
            vec![]
        }
        KeyCode::Char('p') if ctrl => {
            screen.show_password = !screen.show_password;
            vec![]
        }
        KeyCode::Char('r') if ctrl => request_password_reset(screen, config),
        KeyCode::Char('g') if ctrl && config.google_oauth => start_google_oauth(screen, config),
        KeyCode::Backspace => {
            screen.focused_field_mut().backspace();
            vec![]
        }
        KeyCode::Delete => {
            screen.focused_field_mut().delete();
            vec![]
        }
        KeyCode::Left => {
            screen.focused_field_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            screen.focused_field_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            screen.focused_field_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            screen.focused_field_mut().move_end();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            screen.focused_field_mut().insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

/// Handles pasted text: it lands in the focused field.
pub fn handle_paste(screen: &mut ScreenState, text: &str) {
    if screen.loading {
        return;
    }
    screen.focused_field_mut().insert_str(text);
}

/// Validates the staged credentials and starts a submission cycle.
///
/// On validation failure the field errors are populated and no effect is
/// emitted; valid fields keep their input.
fn submit(screen: &mut ScreenState, config: &Config) -> Vec<UiEffect> {
    screen.field_errors = FieldErrors::default();

    let credentials = screen.credentials();
    if let Err(errors) = validate(screen.mode, &credentials) {
        screen.field_errors = errors;
        return vec![];
    }

    screen.loading = true;
    screen.status = None;

    match screen.mode {
        AuthMode::SignIn => vec![UiEffect::SignIn {
            email: credentials.email,
            password: credentials.password,
        }],
        AuthMode::SignUp => vec![UiEffect::SignUp {
            email: credentials.email,
            password: credentials.password,
            email_redirect_to: config.callback_redirect(),
        }],
    }
}

/// Starts a password-reset cycle.
///
/// Guarded precondition: the email field must be non-empty, otherwise an
/// error-styled message is shown and nothing leaves the screen. Offered in
/// sign-in mode only.
fn request_password_reset(screen: &mut ScreenState, config: &Config) -> Vec<UiEffect> {
    if screen.mode == AuthMode::SignUp {
        return vec![];
    }
    if screen.email.is_empty() {
        screen.status = Some(messages::RESET_NEEDS_EMAIL.to_string());
        return vec![];
    }

    screen.loading = true;
    vec![UiEffect::RequestPasswordReset {
        email: screen.email.value().to_string(),
        redirect_to: config.reset_redirect(),
    }]
}

/// Starts the Google OAuth handoff.
///
/// The key binding is gated by the `google_oauth` capability flag, but the
/// operation itself is always available to callers.
pub fn start_google_oauth(screen: &mut ScreenState, config: &Config) -> Vec<UiEffect> {
    if screen.loading {
        return vec![];
    }
    screen.loading = true;
    vec![UiEffect::StartGoogleOAuth {
        redirect_to: config.callback_redirect(),
    }]
}

/// Settles a submission cycle with the provider's result.
pub fn handle_auth_event(screen: &mut ScreenState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::SignInFinished(result) => {
            screen.loading = false;
            match result {
                Ok(session) => {
                    // No local message: navigation is the observer's job.
                    // Closing the screen hands the session to the caller.
                    screen.session = Some(session);
                    vec![UiEffect::Quit]
                }
                Err(err) => {
                    screen.status = Some(messages::user_facing_message(err.message.as_deref()));
                    vec![]
                }
            }
        }
        AuthUiEvent::SignUpFinished(result) => {
            screen.loading = false;
            screen.status = Some(match result {
                Ok(()) => messages::CONFIRMATION_SENT.to_string(),
                Err(err) => messages::user_facing_message(err.message.as_deref()),
            });
            vec![]
        }
        AuthUiEvent::ResetFinished(result) => {
            screen.loading = false;
            screen.status = Some(match result {
                Ok(()) => messages::RESET_LINK_SENT.to_string(),
                Err(_) => messages::RESET_FAILED.to_string(),
            });
            vec![]
        }
        AuthUiEvent::OAuthFinished(result) => {
            // The browser owns the rest of the exchange; the screen stays
            // usable instead of waiting on a navigation that cannot happen
            // in a terminal.
            screen.loading = false;
            if result.is_err() {
                screen.status = Some(messages::GOOGLE_SIGN_IN_FAILED.to_string());
            }
            vec![]
        }
    }
}
