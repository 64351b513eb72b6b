//! Post-load validation hook.
//!
//! Type coercion is the only check the loader performs on its own. Records that
//! need more (required fields, value ranges) implement `Validate`, and
//! `Loader::load_validated` runs it after the environment overlay.

use crate::loader::ConfigError;

/// Structural checks run on a fully loaded record.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Shorthand for a `ConfigError::Validation` with a formatted message.
pub fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}

/// Fail with a validation error when a text field is empty.
///
/// `field` is the serialization key used in the message.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(invalid(format!("{field} is required")));
    }
    Ok(())
}

/// Fail with a validation error when `value` lies outside `min..=max`.
pub fn require_in_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(invalid(format!(
            "{field} must be between {min} and {max} (got {value})"
        )));
    }
    Ok(())
}
