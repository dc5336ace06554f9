//! Organisation API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, OrganisationResponse, SuccessResponse};
use crate::domain::organisation::OrgId;
use crate::domain::user::UserId;
use crate::domain::FieldError;
use crate::infrastructure::directory::CreateOrganisationRequest;

/// Request to create a new organisation
#[derive(Debug, Deserialize)]
pub struct CreateOrganisationApiRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to add a member to an organisation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    #[serde(default)]
    pub user_id: String,
}

/// Organisation list payload nested under `data`
#[derive(Debug, Serialize)]
pub struct OrganisationListData {
    pub organisations: Vec<OrganisationResponse>,
}

/// List the requester's organisations
///
/// GET /api/organisations
pub async fn list_organisations(
    State(state): State<AppState>,
    RequireUser(requester): RequireUser,
) -> Result<Json<SuccessResponse<OrganisationListData>>, ApiError> {
    let organisations = state.directory.list_organisations(requester.id()).await?;

    Ok(Json(SuccessResponse::new(
        "Organisations retrieved",
        OrganisationListData {
            organisations: organisations.iter().map(OrganisationResponse::from).collect(),
        },
    )))
}

/// Fetch a single organisation record; members only
///
/// GET /api/organisations/{orgId}
pub async fn get_organisation(
    State(state): State<AppState>,
    RequireUser(requester): RequireUser,
    Path(org_id): Path<String>,
) -> Result<Json<SuccessResponse<OrganisationResponse>>, ApiError> {
    let organisation = state
        .directory
        .get_organisation(requester.id(), &OrgId::new(org_id))
        .await?;

    Ok(Json(SuccessResponse::new(
        "Organisation record",
        OrganisationResponse::from(&organisation),
    )))
}

/// Create an organisation with the requester as its first member
///
/// POST /api/organisations
pub async fn create_organisation(
    State(state): State<AppState>,
    RequireUser(requester): RequireUser,
    Json(request): Json<CreateOrganisationApiRequest>,
) -> Result<(StatusCode, Json<SuccessResponse<OrganisationResponse>>), ApiError> {
    let organisation = state
        .directory
        .create_organisation(
            requester.id(),
            CreateOrganisationRequest {
                name: request.name,
                description: request.description,
            },
        )
        .await?;

    let response = SuccessResponse::new(
        "Organisation created successfully",
        OrganisationResponse::from(&organisation),
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Add a user to an organisation; requester must already be a member
///
/// POST /api/organisations/{orgId}/users
pub async fn add_member(
    State(state): State<AppState>,
    RequireUser(requester): RequireUser,
    Path(org_id): Path<String>,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<SuccessResponse<()>>, ApiError> {
    if request.user_id.is_empty() {
        return Err(ApiError::unprocessable(
            "Validation failed",
            vec![FieldError::required("userId")],
        ));
    }

    state
        .directory
        .add_member(
            requester.id(),
            &OrgId::new(org_id),
            &UserId::new(request.user_id),
        )
        .await?;

    Ok(Json(SuccessResponse::message_only(
        "User added to organisation successfully",
    )))
}
