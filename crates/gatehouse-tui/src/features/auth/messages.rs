//! Screen-level status messages and provider error mapping.
//!
//! The copy below is a compatibility contract: `classify` styles the status
//! banner by matching phrases inside these strings, so the strings and the
//! substrings must move together.

/// Shown after a successful sign-up.
pub const CONFIRMATION_SENT: &str = "Check your email for the confirmation link!";
/// Shown after a successful password-reset request.
pub const RESET_LINK_SENT: &str = "Password reset link sent to your email!";
/// Shown when a reset is requested without an email address.
pub const RESET_NEEDS_EMAIL: &str = "Please enter your email address first";
/// Shown when the reset request is rejected, whatever the reason.
pub const RESET_FAILED: &str = "Failed to send password reset email";
/// Shown when the OAuth handoff fails, whatever the reason.
pub const GOOGLE_SIGN_IN_FAILED: &str = "Failed to sign in with Google";

const FALLBACK: &str = "An error occurred during authentication";

/// Maps a raw provider message to the user-facing string.
///
/// Known backend strings get fixed translations; anything else passes
/// through verbatim so unexpected failures stay diagnosable. A missing
/// message falls back to a generic line.
pub fn user_facing_message(raw: Option<&str>) -> String {
    match raw {
        Some("Invalid login credentials") => "Invalid email or password".to_string(),
        Some("Email not confirmed") => {
            "Please check your email and confirm your account".to_string()
        }
        Some("User already registered") => {
            "An account with this email already exists".to_string()
        }
        Some("Password should be at least 6 characters") => {
            "Password must be at least 6 characters long".to_string()
        }
        Some(other) => other.to_string(),
        None => FALLBACK.to_string(),
    }
}

/// Visual styling for the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
}

/// Classifies a status message by its text.
///
/// Success is recognized by the confirmation-email and reset-link phrases;
/// everything else renders as an error.
pub fn classify(message: &str) -> MessageStyle {
    if message.contains("Check your email") || message.contains("Password reset link") {
        MessageStyle::Success
    } else {
        MessageStyle::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_messages_are_translated() {
        let table = [
            ("Invalid login credentials", "Invalid email or password"),
            (
                "Email not confirmed",
                "Please check your email and confirm your account",
            ),
            (
                "User already registered",
                "An account with this email already exists",
            ),
            (
                "Password should be at least 6 characters",
                "Password must be at least 6 characters long",
            ),
        ];
        for (raw, expected) in table {
            assert_eq!(user_facing_message(Some(raw)), expected);
        }
    }

    #[test]
    fn test_unknown_messages_pass_through_verbatim() {
        assert_eq!(
            user_facing_message(Some("Database connection lost")),
            "Database connection lost"
        );
    }

    #[test]
    fn test_missing_message_falls_back() {
        assert_eq!(
            user_facing_message(None),
            "An error occurred during authentication"
        );
    }

    #[test]
    fn test_success_phrases_classify_as_success() {
        assert_eq!(classify(CONFIRMATION_SENT), MessageStyle::Success);
        assert_eq!(classify(RESET_LINK_SENT), MessageStyle::Success);
    }

    #[test]
    fn test_everything_else_classifies_as_error() {
        assert_eq!(classify("Invalid email or password"), MessageStyle::Error);
        assert_eq!(classify(RESET_NEEDS_EMAIL), MessageStyle::Error);
        assert_eq!(classify(RESET_FAILED), MessageStyle::Error);
        assert_eq!(classify(GOOGLE_SIGN_IN_FAILED), MessageStyle::Error);
    }
}
