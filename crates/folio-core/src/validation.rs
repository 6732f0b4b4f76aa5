//! Validation utilities.

use crate::{FieldError, FolioError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `FolioError` on failure.
    fn validate_request(&self) -> Result<(), FolioError> {
        self.validate().map_err(validation_errors_to_folio_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `FolioError`.
#[must_use]
pub fn validation_errors_to_folio_error(errors: ValidationErrors) -> FolioError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    FolioError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a locale tag: letters, underscores and dashes only
    /// (`en`, `nl_BE`, `pt-BR`).
    pub fn valid_locale(locale: &str) -> Result<(), ValidationError> {
        if locale.is_empty() || locale.len() > 16 {
            return Err(ValidationError::new("locale_length"));
        }
        if !locale.chars().all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-') {
            return Err(ValidationError::new("locale_invalid_characters"));
        }
        Ok(())
    }

    /// Validates an internal name: word characters, digits, underscores and
    /// dashes, the same shape the admin interface enforces.
    pub fn valid_internal_name(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() || name.len() > 128 {
            return Err(ValidationError::new("internal_name_length"));
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(ValidationError::new("internal_name_invalid_characters"));
        }
        Ok(())
    }
}
