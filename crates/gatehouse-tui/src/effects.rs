//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only, which keeps the reducer pure:
//! it mutates state and returns effects, never performs network calls
//! itself.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Close the screen.
    Quit,

    /// Exchange email/password for a session.
    SignIn { email: String, password: String },

    /// Register a new account.
    SignUp {
        email: String,
        password: String,
        email_redirect_to: String,
    },

    /// Send a password-recovery email.
    RequestPasswordReset { email: String, redirect_to: String },

    /// Open the browser on the OAuth authorize URL.
    StartGoogleOAuth { redirect_to: String },
}
