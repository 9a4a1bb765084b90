//! Password policy enforcement for new passwords.

use dochub_core::config::AuthConfig;
use dochub_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        // Entropy check on top of the character-class rules
        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password with more entropy.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(validator().validate("Ab1!").is_err());
    }

    #[test]
    fn test_missing_character_classes_rejected() {
        assert!(validator().validate("alllowercase1!").is_err());
        assert!(validator().validate("ALLUPPERCASE1!").is_err());
        assert!(validator().validate("NoDigitsHere!").is_err());
    }

    #[test]
    fn test_weak_but_compliant_password_rejected() {
        // Meets the character classes but is a dictionary pattern
        assert!(validator().validate("Password1").is_err());
    }

    #[test]
    fn test_strong_password_accepted() {
        assert!(validator().validate("X9#mK2$vLp7q").is_ok());
    }
}
