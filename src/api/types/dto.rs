//! Wire DTOs shared across endpoints
//!
//! Field names are camelCase for route compatibility; the password hash has
//! no representation here at all.

use serde::Serialize;

use crate::domain::organisation::Organisation;
use crate::domain::user::User;

/// User record as exposed on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().as_str().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            phone: user.phone().to_string(),
        }
    }
}

/// Organisation record as exposed on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationResponse {
    pub org_id: String,
    pub name: String,
    pub description: String,
}

impl From<&Organisation> for OrganisationResponse {
    fn from(org: &Organisation) -> Self {
        Self {
            org_id: org.id().as_str().to_string(),
            name: org.name().to_string(),
            description: org.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::organisation::OrgId;
    use crate::domain::user::UserId;

    #[test]
    fn test_user_response_uses_camel_case() {
        let user = User::new(
            UserId::new("u-1"),
            "john@example.com",
            "John",
            "Doe",
            "1234567890",
            "hash",
        );

        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(json.contains("\"userId\":\"u-1\""));
        assert!(json.contains("\"firstName\":\"John\""));
        assert!(json.contains("\"lastName\":\"Doe\""));
        assert!(!json.contains("hash"));
    }

    #[test]
    fn test_organisation_response_uses_camel_case() {
        let org = Organisation::new(OrgId::new("o-1"), "Acme", "widgets").unwrap();

        let json = serde_json::to_string(&OrganisationResponse::from(&org)).unwrap();
        assert!(json.contains("\"orgId\":\"o-1\""));
        assert!(json.contains("\"name\":\"Acme\""));
    }
}
