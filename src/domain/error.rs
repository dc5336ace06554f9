use thiserror::Error;

/// A single invalid or missing request field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The standard message for a missing required field.
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "This field is required.")
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation failed: {}", format_fields(.errors))]
    Validation { errors: Vec<FieldError> },

    #[error("Email '{email}' is already registered")]
    DuplicateEmail { email: String },

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Validation error for a single field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn validation_errors(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'abc' not found");
        assert_eq!(error.to_string(), "Not found: User 'abc' not found");
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let error = DomainError::validation_errors(vec![
            FieldError::required("email"),
            FieldError::required("password"),
        ]);
        assert_eq!(error.to_string(), "Validation failed: email, password");
    }

    #[test]
    fn test_duplicate_email_error() {
        let error = DomainError::duplicate_email("a@b.com");
        assert_eq!(error.to_string(), "Email 'a@b.com' is already registered");
    }
}
