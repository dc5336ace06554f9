//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::organisation::{Organisation, OrgId, OrganisationRepository};
use crate::domain::user::{RegistrationFields, RegistrationStore, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::directory::{
    Authenticated, CreateOrganisationRequest, DirectoryService, Registration,
};
use crate::infrastructure::user::PasswordHasher;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryApi>,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(directory: Arc<dyn DirectoryApi>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { directory, tokens }
    }
}

/// Trait for the directory service operations the API layer depends on.
/// Requester identity is always an explicit parameter; nothing here reads
/// ambient request state.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn register(&self, fields: RegistrationFields) -> Result<Registration, DomainError>;

    async fn login(&self, email: &str, password: &str) -> Result<Authenticated, DomainError>;

    /// Resolve a token subject to a user, with no access check
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn get_user(&self, requester: &UserId, target: &UserId) -> Result<User, DomainError>;

    async fn list_organisations(
        &self,
        requester: &UserId,
    ) -> Result<Vec<Organisation>, DomainError>;

    async fn get_organisation(
        &self,
        requester: &UserId,
        org_id: &OrgId,
    ) -> Result<Organisation, DomainError>;

    async fn create_organisation(
        &self,
        requester: &UserId,
        request: CreateOrganisationRequest,
    ) -> Result<Organisation, DomainError>;

    async fn add_member(
        &self,
        requester: &UserId,
        org_id: &OrgId,
        target: &UserId,
    ) -> Result<(), DomainError>;
}

#[async_trait]
impl<U, O, H, T> DirectoryApi for DirectoryService<U, O, H, T>
where
    U: UserRepository + RegistrationStore + 'static,
    O: OrganisationRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    async fn register(&self, fields: RegistrationFields) -> Result<Registration, DomainError> {
        DirectoryService::register(self, fields).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Authenticated, DomainError> {
        DirectoryService::login(self, email, password).await
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        DirectoryService::find_user(self, id).await
    }

    async fn get_user(&self, requester: &UserId, target: &UserId) -> Result<User, DomainError> {
        DirectoryService::get_user(self, requester, target).await
    }

    async fn list_organisations(
        &self,
        requester: &UserId,
    ) -> Result<Vec<Organisation>, DomainError> {
        DirectoryService::list_organisations(self, requester).await
    }

    async fn get_organisation(
        &self,
        requester: &UserId,
        org_id: &OrgId,
    ) -> Result<Organisation, DomainError> {
        DirectoryService::get_organisation(self, requester, org_id).await
    }

    async fn create_organisation(
        &self,
        requester: &UserId,
        request: CreateOrganisationRequest,
    ) -> Result<Organisation, DomainError> {
        DirectoryService::create_organisation(self, requester, request).await
    }

    async fn add_member(
        &self,
        requester: &UserId,
        org_id: &OrgId,
        target: &UserId,
    ) -> Result<(), DomainError> {
        DirectoryService::add_member(self, requester, org_id, target).await
    }
}
