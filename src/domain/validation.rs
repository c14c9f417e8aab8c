//! Intake checks shared by explicit flags and interactive prompts.

use thiserror::Error;

/// Minimum accepted length for database and manager passwords.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reasons a supplied value is refused at intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please specify a password of at least {min} characters to continue.")]
    PasswordTooShort { min: usize },

    #[error("{field} cannot be empty.")]
    Empty { field: &'static str },
}

/// Reject empty passwords and passwords shorter than [`MIN_PASSWORD_LENGTH`].
///
/// Length is counted in characters, not bytes.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LENGTH });
    }
    Ok(())
}

/// Reject values that are empty once surrounding whitespace is removed.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}
