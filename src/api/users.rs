//! User API endpoints

use axum::extract::{Path, State};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SuccessResponse, UserResponse};
use crate::domain::user::UserId;

/// Fetch a user record
///
/// GET /api/users/{id}
///
/// Permitted for the user themselves or for anyone sharing at least one
/// organisation with them.
pub async fn get_user(
    State(state): State<AppState>,
    RequireUser(requester): RequireUser,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<UserResponse>>, ApiError> {
    let user = state
        .directory
        .get_user(requester.id(), &UserId::new(id))
        .await?;

    Ok(Json(SuccessResponse::new(
        "User record",
        UserResponse::from(&user),
    )))
}
