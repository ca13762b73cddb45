//! Field validation for user-entered text.
//!
//! Validators are the gate in front of every mutation: callers run them first and only
//! build and store a record once they pass. The store itself never validates.
//!
//! Lengths are counted in characters (Unicode scalar values).
//!
//! Food names are measured after trimming. Additional considerations are measured
//! raw, so surrounding whitespace counts toward the 500 character budget.

use thiserror::Error;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const CONSIDERATIONS_MAX_LEN: usize = 500;

/// Error type for field validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Food name is required")]
    NameRequired,

    #[error("Food name must be at least {} characters", NAME_MIN_LEN)]
    NameTooShort,

    #[error("Food name must be less than {} characters", NAME_MAX_LEN)]
    NameTooLong,

    #[error("Additional considerations must be less than {} characters", CONSIDERATIONS_MAX_LEN)]
    ConsiderationsTooLong,
}

/// Validates a food name.
///
/// # Examples
/// ```
/// use caremate::validation::{validate_food_name, ValidationError};
///
/// assert!(validate_food_name("  Soup ").is_ok());
/// assert_eq!(validate_food_name("   "), Err(ValidationError::NameRequired));
/// assert_eq!(validate_food_name(" a "), Err(ValidationError::NameTooShort));
/// ```
pub fn validate_food_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::NameRequired);
    }
    if len < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

pub fn validate_additional_considerations(text: &str) -> Result<(), ValidationError> {
    if text.chars().count() > CONSIDERATIONS_MAX_LEN {
        return Err(ValidationError::ConsiderationsTooLong);
    }
    Ok(())
}
