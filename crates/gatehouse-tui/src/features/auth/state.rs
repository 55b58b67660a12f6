//! Auth screen state and its pure transitions.

use gatehouse_core::auth::Session;
use gatehouse_core::validate::{AuthMode, Credentials, FieldErrors};

use crate::common::FieldBuffer;

/// Input focus within the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Email,
    Password,
    ConfirmPassword,
}

/// State for the sign-in / sign-up screen.
///
/// Created on screen mount with empty fields and sign-in mode; mutated only
/// by the reducer; dropped when the screen closes.
pub struct ScreenState {
    pub mode: AuthMode,
    pub email: FieldBuffer,
    pub password: FieldBuffer,
    pub confirm_password: FieldBuffer,
    pub focus: FocusField,
    /// Renders password fields as plain text when set.
    pub show_password: bool,
    /// Manual mutual-exclusion gate: while set, editing and submission keys
    /// are ignored. An in-flight provider call is never cancelled.
    pub loading: bool,
    /// Screen-level banner. Styling derives from `messages::classify`.
    pub status: Option<String>,
    pub field_errors: FieldErrors,
    /// Session established by a successful sign-in. The screen closes once
    /// this is set; the caller observes it.
    pub session: Option<Session>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::SignIn,
            email: FieldBuffer::default(),
            password: FieldBuffer::default(),
            confirm_password: FieldBuffer::default(),
            focus: FocusField::Email,
            show_password: false,
            loading: false,
            status: None,
            field_errors: FieldErrors::default(),
            session: None,
        }
    }

    /// Snapshots the staged form values for validation and submission.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm_password.value().to_string(),
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut FieldBuffer {
        match self.focus {
            FocusField::Email => &mut self.email,
            FocusField::Password => &mut self.password,
            FocusField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Moves focus to the next field; the confirm field participates only in
    /// sign-up mode.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (FocusField::Email, _) => FocusField::Password,
            (FocusField::Password, AuthMode::SignUp) => FocusField::ConfirmPassword,
            (FocusField::Password | FocusField::ConfirmPassword, _) => FocusField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (FocusField::Email, AuthMode::SignUp) => FocusField::ConfirmPassword,
            (FocusField::Email, AuthMode::SignIn) => FocusField::Password,
            (FocusField::Password, _) => FocusField::Email,
            (FocusField::ConfirmPassword, _) => FocusField::Password,
        };
    }

    /// Flips between sign-in and sign-up.
    ///
    /// A mode switch never carries over partial input or stale errors.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.reset_transient();
    }

    /// Clears all transient fields: input, errors, and the status banner.
    pub fn reset_transient(&mut self) {
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.field_errors = FieldErrors::default();
        self.status = None;
        self.focus = FocusField::Email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let screen = ScreenState::new();

        assert_eq!(screen.mode, AuthMode::SignIn);
        assert_eq!(screen.focus, FocusField::Email);
        assert!(!screen.loading);
        assert!(screen.status.is_none());
        assert!(screen.email.is_empty());
    }

    #[test]
    fn test_focus_cycle_skips_confirm_in_sign_in_mode() {
        let mut screen = ScreenState::new();

        screen.focus_next();
        assert_eq!(screen.focus, FocusField::Password);
        screen.focus_next();
        assert_eq!(screen.focus, FocusField::Email);
    }

    #[test]
    fn test_focus_cycle_includes_confirm_in_sign_up_mode() {
        let mut screen = ScreenState::new();
        screen.toggle_mode();

        screen.focus_next();
        screen.focus_next();
        assert_eq!(screen.focus, FocusField::ConfirmPassword);
        screen.focus_next();
        assert_eq!(screen.focus, FocusField::Email);
    }

    #[test]
    fn test_focus_prev_mirrors_next() {
        let mut screen = ScreenState::new();
        screen.toggle_mode();

        screen.focus_prev();
        assert_eq!(screen.focus, FocusField::ConfirmPassword);
        screen.focus_prev();
        assert_eq!(screen.focus, FocusField::Password);
    }

    #[test]
    fn test_toggle_mode_clears_transient_state() {
        let mut screen = ScreenState::new();
        screen.email.insert_str("a@b.com");
        screen.password.insert_str("abcdef");
        screen.status = Some("stale".to_string());
        screen.focus = FocusField::Password;

        screen.toggle_mode();

        assert_eq!(screen.mode, AuthMode::SignUp);
        assert!(screen.email.is_empty());
        assert!(screen.password.is_empty());
        assert!(screen.status.is_none());
        assert_eq!(screen.focus, FocusField::Email);
    }
}
