//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth for
//! how events modify state.

use crossterm::event::{Event, KeyEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::auth;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => match term_event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                auth::handle_key(&mut app.screen, &app.config, key)
            }
            Event::Paste(text) => {
                auth::handle_paste(&mut app.screen, &text);
                vec![]
            }
            _ => vec![],
        },
        UiEvent::Auth(auth_event) => auth::handle_auth_event(&mut app.screen, auth_event),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use gatehouse_core::auth::ProviderError;
    use gatehouse_core::config::Config;
    use gatehouse_core::validate::AuthMode;

    use super::*;
    use crate::events::AuthUiEvent;

    fn app() -> AppState {
        AppState::new(Config {
            site_url: "https://app.example.com".to_string(),
            ..Config::default()
        })
    }

    fn press(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_lands_in_focused_field() {
        let mut app = app();
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "abcdef");

        assert_eq!(app.screen.email.value(), "a@b.com");
        assert_eq!(app.screen.password.value(), "abcdef");
    }

    #[test]
    fn test_paste_event_fills_focused_field() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("pasted@example.com".to_string())),
        );

        assert_eq!(app.screen.email.value(), "pasted@example.com");
    }

    #[test]
    fn test_submit_round_trip_maps_failure_message() {
        let mut app = app();
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "abcdef");

        let effects = press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            effects,
            vec![UiEffect::SignIn {
                email: "a@b.com".to_string(),
                password: "abcdef".to_string(),
            }]
        );
        assert!(app.screen.loading);

        let effects = update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::SignInFinished(Err(ProviderError::new(
                "Invalid login credentials",
            )))),
        );

        assert!(effects.is_empty());
        assert_eq!(
            app.screen.status.as_deref(),
            Some("Invalid email or password")
        );
        assert!(!app.screen.loading);
    }

    #[test]
    fn test_mode_toggle_via_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(app.screen.mode, AuthMode::SignUp);
        press(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(app.screen.mode, AuthMode::SignIn);
    }

    #[test]
    fn test_tick_advances_spinner_only() {
        let mut app = app();
        let effects = update(&mut app, UiEvent::Tick);

        assert!(effects.is_empty());
        assert_eq!(app.spinner_frame, 1);
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut app = app();
        let effects = press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(effects, vec![UiEffect::Quit]);
    }
}
