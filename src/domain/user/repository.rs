//! User repository and registration store traits

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::organisation::Organisation;
use crate::domain::DomainError;

/// Repository for durable user identity records.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Get a user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by case-normalized email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Delete a user by ID, returning whether anything was removed.
    ///
    /// Only used to undo a partially applied registration; there is no
    /// user-facing delete.
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;
}

/// Atomic write spanning the user and organisation stores.
///
/// A registration lands as a single write: the user, their owning
/// organisation and the membership linking them all become visible
/// together, or not at all. Email uniqueness is enforced inside this
/// write, not by a caller-side check-then-act.
///
/// Implementations must share storage with the `UserRepository` and
/// `OrganisationRepository` the service reads from; the in-memory store
/// implements all three over one table set.
#[async_trait]
pub trait RegistrationStore: Send + Sync + std::fmt::Debug {
    /// Persist a new user together with their owning organisation, the
    /// user being its sole member. Fails with `DuplicateEmail` if the
    /// email is taken, in which case nothing is written.
    async fn create_registration(
        &self,
        user: User,
        organisation: Organisation,
    ) -> Result<(User, Organisation), DomainError>;
}
