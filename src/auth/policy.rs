//! Password complexity policy

use crate::error::{LinealError, LinealResult};

/// Minimum password length
pub const MIN_LENGTH: usize = 8;

/// Check a password against the complexity policy
///
/// Accepts passwords of at least [`MIN_LENGTH`] characters containing at
/// least one uppercase letter, one lowercase letter, and one digit.
pub fn validate_complexity(password: &str) -> LinealResult<()> {
    let long_enough = password.chars().count() >= MIN_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(LinealError::WeakPassword)
    }
}
