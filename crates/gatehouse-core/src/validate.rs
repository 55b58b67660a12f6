//! Declarative validation for the auth form payloads.
//!
//! This is a contract layer: which fields must look like what before a
//! submission may leave the screen. All invalid fields are reported in a
//! single pass so the form can show every error at once.

use regex::Regex;

/// Which mode a payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Raw form values staged for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only meaningful in sign-up mode.
    pub confirm_password: String,
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    /// Returns true when every field is valid.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

/// Validates staged credentials for the given mode.
///
/// Total over arbitrary input: never panics, never touches the network.
/// In sign-up mode a confirm-password mismatch is attributed to
/// `confirm_password`, not `password`, so the error renders next to the
/// field the user has to fix.
///
/// # Errors
/// Returns the per-field messages for every invalid field.
pub fn validate(mode: AuthMode, credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if !valid_email(&credentials.email) {
        errors.email = Some(INVALID_EMAIL.to_string());
    }

    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT.to_string());
    }

    if mode == AuthMode::SignUp && credentials.confirm_password != credentials.password {
        errors.confirm_password = Some(PASSWORDS_DONT_MATCH.to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str, confirm: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_sign_in_valid_credentials() {
        let creds = credentials("a@b.com", "abcdef", "");
        assert!(validate(AuthMode::SignIn, &creds).is_ok());
    }

    #[test]
    fn test_sign_in_short_password_flags_password_only() {
        let creds = credentials("a@b.com", "12345", "");
        let errors = validate(AuthMode::SignIn, &creds).unwrap_err();

        assert!(errors.email.is_none());
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
        assert!(errors.confirm_password.is_none());
    }

    #[test]
    fn test_sign_in_ignores_confirm_password() {
        let creds = credentials("a@b.com", "abcdef", "different");
        assert!(validate(AuthMode::SignIn, &creds).is_ok());
    }

    #[test]
    fn test_sign_up_mismatch_flags_confirm_only() {
        let creds = credentials("a@b.com", "abcdef", "abcdex");
        let errors = validate(AuthMode::SignUp, &creds).unwrap_err();

        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some(PASSWORDS_DONT_MATCH)
        );
    }

    #[test]
    fn test_sign_up_matching_passwords_pass() {
        let creds = credentials("a@b.com", "abcdef", "abcdef");
        assert!(validate(AuthMode::SignUp, &creds).is_ok());
    }

    #[test]
    fn test_empty_strings_flag_email_and_password() {
        let creds = credentials("", "", "");
        let errors = validate(AuthMode::SignIn, &creds).unwrap_err();

        assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_all_invalid_fields_reported_in_one_pass() {
        let creds = credentials("not-an-email", "123", "456");
        let errors = validate(AuthMode::SignUp, &creds).unwrap_err();

        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(errors.confirm_password.is_some());
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["plainaddress", "missing@tld", "two words@x.com", "@no-local.com"] {
            let creds = credentials(bad, "abcdef", "");
            assert!(validate(AuthMode::SignIn, &creds).is_err(), "{bad}");
        }
        for good in ["a@b.co", "user.name+tag@sub.example.org"] {
            let creds = credentials(good, "abcdef", "");
            assert!(validate(AuthMode::SignIn, &creds).is_ok(), "{good}");
        }
    }
}
