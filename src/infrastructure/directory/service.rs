//! Directory service: registration, login and organisation access control
//!
//! This is the policy layer. It orchestrates the user store, the
//! organisation/membership store and the token issuer, and is the only
//! place where the access rules live.

use std::sync::Arc;

use tracing::info;

use crate::domain::organisation::{Organisation, OrgId, OrganisationRepository};
use crate::domain::user::{
    normalize_email, validate_registration, RegistrationFields, RegistrationStore, User, UserId,
    UserRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::user::PasswordHasher;

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub organisation: Organisation,
    pub access_token: String,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub access_token: String,
}

/// Request for creating an organisation explicitly
#[derive(Debug, Clone)]
pub struct CreateOrganisationRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Directory service over a user store, an organisation store, a password
/// hasher and a token issuer.
#[derive(Debug)]
pub struct DirectoryService<U, O, H, T>
where
    U: UserRepository + RegistrationStore,
    O: OrganisationRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    users: Arc<U>,
    organisations: Arc<O>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, O, H, T> DirectoryService<U, O, H, T>
where
    U: UserRepository + RegistrationStore,
    O: OrganisationRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(users: Arc<U>, organisations: Arc<O>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            organisations,
            hasher,
            tokens,
        }
    }

    /// Register a new user.
    ///
    /// Creates the user, an organisation named `"<firstName>'s Organisation"`
    /// with the user as its sole member, and issues a token. The user,
    /// organisation and membership land in the store as a single write, so
    /// no concurrent caller can observe the user without its owning
    /// organisation. Duplicate emails are settled inside that write, with
    /// exactly one winner under concurrency.
    pub async fn register(&self, fields: RegistrationFields) -> Result<Registration, DomainError> {
        validate_registration(&fields)?;

        let password_hash = self.hasher.hash(&fields.password)?;

        let user = User::new(
            UserId::generate(),
            normalize_email(&fields.email),
            fields.first_name,
            fields.last_name,
            fields.phone.unwrap_or_default(),
            password_hash,
        );

        let organisation = Organisation::new(
            OrgId::generate(),
            format!("{}'s Organisation", user.first_name()),
            "",
        )?;

        let (user, organisation) = self.users.create_registration(user, organisation).await?;

        let access_token = match self.tokens.issue(&user) {
            Ok(token) => token,
            Err(e) => {
                self.undo_register(user.id(), organisation.id()).await;
                return Err(e);
            }
        };

        info!(user_id = %user.id(), org_id = %organisation.id(), "registered new user");

        Ok(Registration {
            user,
            organisation,
            access_token,
        })
    }

    /// Roll back a registration whose token could not be issued.
    async fn undo_register(&self, user_id: &UserId, org_id: &OrgId) {
        let _ = self.organisations.delete(org_id).await;
        let _ = self.users.delete(user_id).await;
    }

    /// Authenticate by email and password and issue a token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<Authenticated, DomainError> {
        let user = self
            .verify_credentials(email, password)
            .await?
            .ok_or(DomainError::AuthenticationFailed)?;

        let access_token = self.tokens.issue(&user)?;

        Ok(Authenticated { user, access_token })
    }

    /// Return the matching user only if the password verifies against the
    /// stored hash. No-match and no-such-email both yield `None`.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.users.get_by_email(&normalize_email(email)).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Look a user up by ID without any access check. Used by the
    /// authentication layer to resolve token subjects.
    pub async fn find_user(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.users.get(id).await
    }

    /// Fetch a user record on behalf of a requester.
    ///
    /// Permitted iff the requester is the target or shares at least one
    /// organisation with the target.
    pub async fn get_user(&self, requester: &UserId, target: &UserId) -> Result<User, DomainError> {
        let user = self
            .users
            .get(target)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))?;

        if requester == target || self.share_organisation(requester, target).await? {
            Ok(user)
        } else {
            Err(DomainError::forbidden(
                "You do not have access to this user's record",
            ))
        }
    }

    async fn share_organisation(&self, a: &UserId, b: &UserId) -> Result<bool, DomainError> {
        let of_a = self.organisations.organisations_of(a).await?;

        for org in &of_a {
            if self.organisations.is_member(org.id(), b).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// All organisations the requester belongs to. No cross-user visibility.
    pub async fn list_organisations(
        &self,
        requester: &UserId,
    ) -> Result<Vec<Organisation>, DomainError> {
        self.organisations.organisations_of(requester).await
    }

    /// Fetch an organisation record; members only.
    pub async fn get_organisation(
        &self,
        requester: &UserId,
        org_id: &OrgId,
    ) -> Result<Organisation, DomainError> {
        let organisation = self
            .organisations
            .get(org_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Organisation not found"))?;

        if self.organisations.is_member(org_id, requester).await? {
            Ok(organisation)
        } else {
            Err(DomainError::forbidden(
                "You do not have access to this organisation's record",
            ))
        }
    }

    /// Create an organisation with the requester as its first member,
    /// atomically.
    pub async fn create_organisation(
        &self,
        requester: &UserId,
        request: CreateOrganisationRequest,
    ) -> Result<Organisation, DomainError> {
        let organisation = Organisation::new(
            OrgId::generate(),
            request.name,
            request.description.unwrap_or_default(),
        )?;

        let organisation = self.organisations.create(organisation).await?;

        if let Err(e) = self
            .organisations
            .add_member(organisation.id(), requester)
            .await
        {
            let _ = self.organisations.delete(organisation.id()).await;
            return Err(e);
        }

        info!(org_id = %organisation.id(), "organisation created");

        Ok(organisation)
    }

    /// Add a user to an organisation.
    ///
    /// The requester must already be a member; the membership check runs
    /// after the organisation lookup but before the target lookup, so a
    /// non-member cannot probe which user IDs exist.
    pub async fn add_member(
        &self,
        requester: &UserId,
        org_id: &OrgId,
        target: &UserId,
    ) -> Result<(), DomainError> {
        if self.organisations.get(org_id).await?.is_none() {
            return Err(DomainError::not_found("Organisation not found"));
        }

        if !self.organisations.is_member(org_id, requester).await? {
            return Err(DomainError::forbidden(
                "You do not have access to this organisation",
            ));
        }

        if self.users.get(target).await?.is_none() {
            return Err(DomainError::not_found("User not found"));
        }

        self.organisations.add_member(org_id, target).await
    }
}
