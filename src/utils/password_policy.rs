//! Password strength rules
//!
//! A password is accepted when it is at least [`MIN_LENGTH`] characters
//! long and contains a lowercase letter, an uppercase letter, a digit and
//! one symbol from [`SYMBOLS`]. All failed rules are reported at once.

use validator::ValidationError;

pub const MIN_LENGTH: usize = 8;

/// Accepted symbol set.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A single password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl PasswordRule {
    pub fn message(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "must be at least 8 characters long",
            PasswordRule::Lowercase => "must contain a lowercase letter",
            PasswordRule::Uppercase => "must contain an uppercase letter",
            PasswordRule::Digit => "must contain a digit",
            PasswordRule::Symbol => "must contain a symbol",
        }
    }
}

/// Every rule the password breaks, in a stable order.
pub fn violations(password: &str) -> Vec<PasswordRule> {
    let mut failed = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        failed.push(PasswordRule::MinLength);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        failed.push(PasswordRule::Lowercase);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        failed.push(PasswordRule::Uppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failed.push(PasswordRule::Digit);
    }
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        failed.push(PasswordRule::Symbol);
    }

    failed
}

/// `validator` custom rule wrapping [`violations`].
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let failed = violations(password);
    if failed.is_empty() {
        return Ok(());
    }

    let message = failed
        .iter()
        .map(PasswordRule::message)
        .collect::<Vec<_>>()
        .join(", ");

    Err(ValidationError::new("weak_password").with_message(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word_is_rejected() {
        assert_eq!(
            violations("password"),
            vec![PasswordRule::Uppercase, PasswordRule::Digit, PasswordRule::Symbol]
        );
        assert!(validate_password_strength("password").is_err());
    }

    #[test]
    fn test_strong_password_is_accepted() {
        assert!(violations("MyP@ssw0rd").is_empty());
        assert!(validate_password_strength("MyP@ssw0rd").is_ok());
    }

    #[test]
    fn test_short_password_reports_every_rule() {
        let error = validate_password_strength("aB1!").unwrap_err();
        let message = error.message.unwrap();

        assert_eq!(error.code, "weak_password");
        assert!(message.contains("at least 8"));
        assert_eq!(violations(""), vec![
            PasswordRule::MinLength,
            PasswordRule::Lowercase,
            PasswordRule::Uppercase,
            PasswordRule::Digit,
            PasswordRule::Symbol,
        ]);
    }
}
