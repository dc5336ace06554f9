//! Organisation repository trait

use async_trait::async_trait;

use super::entity::{Organisation, OrgId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for organisation records and the user<->organisation
/// membership relation.
///
/// Membership is a set of (user, organisation) pairs: adding an existing
/// member is a no-op and concurrent adds for the same pair must converge to
/// the same state.
#[async_trait]
pub trait OrganisationRepository: Send + Sync + std::fmt::Debug {
    /// Get an organisation by ID
    async fn get(&self, id: &OrgId) -> Result<Option<Organisation>, DomainError>;

    /// Create a new organisation with an empty member set
    async fn create(&self, organisation: Organisation) -> Result<Organisation, DomainError>;

    /// Delete an organisation and its memberships, returning whether
    /// anything was removed.
    ///
    /// Only used to undo a partially applied creation; there is no
    /// user-facing delete.
    async fn delete(&self, id: &OrgId) -> Result<bool, DomainError>;

    /// Add a user to an organisation. Idempotent; fails with `NotFound` if
    /// the organisation does not exist. The caller is responsible for
    /// checking that the user exists.
    async fn add_member(&self, org_id: &OrgId, user_id: &UserId) -> Result<(), DomainError>;

    /// Check whether a user belongs to an organisation
    async fn is_member(&self, org_id: &OrgId, user_id: &UserId) -> Result<bool, DomainError>;

    /// All organisations a user belongs to
    async fn organisations_of(&self, user_id: &UserId) -> Result<Vec<Organisation>, DomainError>;

    /// IDs of all members of an organisation. Fails with `NotFound` if the
    /// organisation does not exist.
    async fn member_ids_of(&self, org_id: &OrgId) -> Result<Vec<UserId>, DomainError>;
}
