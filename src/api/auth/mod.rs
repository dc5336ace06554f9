//! Authentication API endpoints
//!
//! Registration and login, both unauthenticated, both returning a bearer
//! token bound to the user.

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SuccessResponse, UserResponse};
use crate::domain::user::RegistrationFields;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration request body. Presence of required fields is validated by
/// the directory service so that all missing fields are reported together.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<RegisterRequest> for RegistrationFields {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
            phone: request.phone,
        }
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Token + user payload nested under `data` in auth responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub access_token: String,
    pub user: UserResponse,
}

/// Register a new user
///
/// POST /auth/register
///
/// Creates the user together with their default organisation and returns
/// 201 with a token.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SuccessResponse<AuthData>>), ApiError> {
    let registration = state.directory.register(request.into()).await?;

    let response = SuccessResponse::new(
        "Registration successful",
        AuthData {
            access_token: registration.access_token,
            user: UserResponse::from(&registration.user),
        },
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SuccessResponse<AuthData>>, ApiError> {
    let authenticated = state
        .directory
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(SuccessResponse::new(
        "Login successful",
        AuthData {
            access_token: authenticated.access_token,
            user: UserResponse::from(&authenticated.user),
        },
    )))
}
