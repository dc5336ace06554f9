//! In-memory directory store
//!
//! Users, organisations and the membership relation live behind one lock.
//! A registration is applied as a single write, so no reader can observe
//! the user before its owning organisation and membership exist.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::domain::organisation::{Organisation, OrgId, OrganisationRepository};
use crate::domain::user::{RegistrationStore, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct DirectoryTables {
    users: HashMap<String, User>,
    /// Index for email -> user ID lookup
    email_index: HashMap<String, String>,
    organisations: HashMap<String, Organisation>,
    /// Membership relation: organisation ID -> set of member user IDs
    members: HashMap<String, HashSet<String>>,
}

/// In-memory implementation of the directory storage traits.
///
/// All tables share one lock: `create_registration` checks and applies the
/// user, organisation and membership inserts under a single write guard,
/// and of two concurrent registrations with the same email exactly one
/// wins.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryStore {
    tables: RwLock<DirectoryTables>,
}

impl InMemoryDirectoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryDirectoryStore {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(id.as_str()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .email_index
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;

        if let Some(user) = tables.users.remove(id.as_str()) {
            tables.email_index.remove(user.email());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[async_trait]
impl RegistrationStore for InMemoryDirectoryStore {
    async fn create_registration(
        &self,
        user: User,
        organisation: Organisation,
    ) -> Result<(User, Organisation), DomainError> {
        let mut tables = self.tables.write().await;

        let user_id = user.id().as_str().to_string();
        let org_id = organisation.id().as_str().to_string();
        let email = user.email().to_string();

        // All checks run before any insert, so a failure writes nothing
        if tables.email_index.contains_key(&email) {
            return Err(DomainError::duplicate_email(email));
        }

        if tables.users.contains_key(&user_id) {
            return Err(DomainError::storage(format!(
                "User ID '{}' already exists",
                user_id
            )));
        }

        if tables.organisations.contains_key(&org_id) {
            return Err(DomainError::storage(format!(
                "Organisation ID '{}' already exists",
                org_id
            )));
        }

        tables.email_index.insert(email, user_id.clone());
        tables.users.insert(user_id.clone(), user.clone());
        tables
            .members
            .insert(org_id.clone(), HashSet::from([user_id]));
        tables.organisations.insert(org_id, organisation.clone());

        Ok((user, organisation))
    }
}

#[async_trait]
impl OrganisationRepository for InMemoryDirectoryStore {
    async fn get(&self, id: &OrgId) -> Result<Option<Organisation>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.organisations.get(id.as_str()).cloned())
    }

    async fn create(&self, organisation: Organisation) -> Result<Organisation, DomainError> {
        let mut tables = self.tables.write().await;

        let id = organisation.id().as_str().to_string();

        if tables.organisations.contains_key(&id) {
            return Err(DomainError::storage(format!(
                "Organisation ID '{}' already exists",
                id
            )));
        }

        tables.members.insert(id.clone(), HashSet::new());
        tables.organisations.insert(id, organisation.clone());

        Ok(organisation)
    }

    async fn delete(&self, id: &OrgId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;

        tables.members.remove(id.as_str());
        Ok(tables.organisations.remove(id.as_str()).is_some())
    }

    async fn add_member(&self, org_id: &OrgId, user_id: &UserId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let members = tables
            .members
            .get_mut(org_id.as_str())
            .ok_or_else(|| DomainError::not_found("Organisation not found"))?;

        // HashSet insert makes re-adding an existing member a no-op
        members.insert(user_id.as_str().to_string());

        Ok(())
    }

    async fn is_member(&self, org_id: &OrgId, user_id: &UserId) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .members
            .get(org_id.as_str())
            .is_some_and(|members| members.contains(user_id.as_str())))
    }

    async fn organisations_of(&self, user_id: &UserId) -> Result<Vec<Organisation>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .members
            .iter()
            .filter(|(_, members)| members.contains(user_id.as_str()))
            .filter_map(|(org_id, _)| tables.organisations.get(org_id))
            .cloned()
            .collect())
    }

    async fn member_ids_of(&self, org_id: &OrgId) -> Result<Vec<UserId>, DomainError> {
        let tables = self.tables.read().await;

        let members = tables
            .members
            .get(org_id.as_str())
            .ok_or_else(|| DomainError::not_found("Organisation not found"))?;

        Ok(members.iter().map(UserId::new).collect())
    }
}
