//! Organisation entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::validate_organisation_name;
use crate::domain::DomainError;

/// Opaque organisation identifier, generated at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgId(String);

impl OrgId {
    /// Wrap an existing identifier (e.g. from a path parameter).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organisation entity. Membership is held by the repository, not the
/// entity: an organisation record carries only its own attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organisation {
    /// Unique identifier
    id: OrgId,
    /// Display name, required
    name: String,
    /// Description, defaults to empty
    description: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Organisation {
    /// Create a new organisation. The name must be non-empty.
    pub fn new(
        id: OrgId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_organisation_name(&name)?;

        Ok(Self {
            id,
            name,
            description: description.into(),
            created_at: Utc::now(),
        })
    }

    // Getters

    pub fn id(&self) -> &OrgId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
