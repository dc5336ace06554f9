//! Organisation field validation

use crate::domain::DomainError;

/// Validate an organisation name.
///
/// Rules:
/// - Cannot be empty or whitespace-only
pub fn validate_organisation_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name", "This field is required."));
    }

    Ok(())
}
