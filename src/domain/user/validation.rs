//! Registration field validation

use validator::ValidateEmail;

use crate::domain::{DomainError, FieldError};

/// Raw registration input, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct RegistrationFields {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Validate presence of every required registration field and the email
/// shape. Errors enumerate all offending fields at once so the caller can
/// report them together.
pub fn validate_registration(fields: &RegistrationFields) -> Result<(), DomainError> {
    let mut errors = Vec::new();

    // Shape-check the trimmed value, matching what normalize_email stores
    let email = fields.email.trim();
    if email.is_empty() {
        errors.push(FieldError::required("email"));
    } else if !email.validate_email() {
        errors.push(FieldError::new("email", "Enter a valid email address."));
    }

    if fields.first_name.trim().is_empty() {
        errors.push(FieldError::required("firstName"));
    }

    if fields.last_name.trim().is_empty() {
        errors.push(FieldError::required("lastName"));
    }

    if fields.password.is_empty() {
        errors.push(FieldError::required("password"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation_errors(errors))
    }
}

/// Case-normalize an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
