use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::auth;
use super::health;
use super::organisations;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints (no token required)
        .nest("/auth", auth::create_auth_router())
        // Token-protected directory API
        .nest("/api", create_api_router())
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}", get(users::get_user))
        .route(
            "/organisations",
            get(organisations::list_organisations).post(organisations::create_organisation),
        )
        .route(
            "/organisations/{org_id}",
            get(organisations::get_organisation),
        )
        .route(
            "/organisations/{org_id}/users",
            post(organisations::add_member),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::auth::JwtService;
    use crate::infrastructure::directory::{DirectoryService, InMemoryDirectoryStore};
    use crate::infrastructure::user::Argon2Hasher;

    fn test_app() -> Router {
        let tokens = Arc::new(JwtService::with_default_config());
        let store = Arc::new(InMemoryDirectoryStore::new());
        let directory = Arc::new(DirectoryService::new(
            store.clone(),
            store,
            Arc::new(Argon2Hasher::new()),
            tokens.clone(),
        ));

        create_router(AppState::new(directory, tokens))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    fn post_json(uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        builder.body(Body::empty()).unwrap()
    }

    fn registration_body(email: &str, first_name: &str) -> Value {
        json!({
            "email": email,
            "firstName": first_name,
            "lastName": "Doe",
            "password": "password123",
            "phone": "1234567890",
        })
    }

    /// Register a user and return (token, userId, orgId of the default org)
    async fn register(app: &Router, email: &str, first_name: &str) -> (String, String, String) {
        let (status, body) = send(
            app,
            post_json("/auth/register", &registration_body(email, first_name), None),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let token = body["data"]["accessToken"].as_str().unwrap().to_string();
        let user_id = body["data"]["user"]["userId"].as_str().unwrap().to_string();

        // The default organisation is the only one the new user belongs to
        let (status, body) = send(app, get_with_token("/api/organisations", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        let org_id = body["data"]["organisations"][0]["orgId"]
            .as_str()
            .unwrap()
            .to_string();

        (token, user_id, org_id)
    }

    #[tokio::test]
    async fn test_register_successfully() {
        let app = test_app();

        let (status, body) = send(
            &app,
            post_json(
                "/auth/register",
                &registration_body("john.doe@example.com", "John"),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Registration successful");
        assert!(body["data"]["accessToken"].is_string());
        assert_eq!(body["data"]["user"]["firstName"], "John");
        assert_eq!(body["data"]["user"]["lastName"], "Doe");
        assert_eq!(body["data"]["user"]["email"], "john.doe@example.com");
    }

    #[tokio::test]
    async fn test_register_with_missing_fields() {
        let app = test_app();

        let (status, body) = send(
            &app,
            post_json(
                "/auth/register",
                &json!({
                    "firstName": "John",
                    "email": "john.doe@example.com",
                    "password": "password123",
                }),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["statusCode"], 422);
        assert_eq!(body["errors"][0]["field"], "lastName");
    }

    #[tokio::test]
    async fn test_register_with_duplicate_email() {
        let app = test_app();

        register(&app, "john.doe@example.com", "John").await;

        let (status, body) = send(
            &app,
            post_json(
                "/auth/register",
                &registration_body("john.doe@example.com", "Jane"),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Registration unsuccessful");
    }

    #[tokio::test]
    async fn test_login_successfully() {
        let app = test_app();

        register(&app, "john.doe@example.com", "John").await;

        let (status, body) = send(
            &app,
            post_json(
                "/auth/login",
                &json!({"email": "john.doe@example.com", "password": "password123"}),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        assert!(body["data"]["accessToken"].is_string());
    }

    #[tokio::test]
    async fn test_login_with_wrong_credentials() {
        let app = test_app();

        register(&app, "john.doe@example.com", "John").await;

        let (status, body) = send(
            &app,
            post_json(
                "/auth/login",
                &json!({"email": "john.doe@example.com", "password": "wrong"}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Authentication failed");

        let (status, _) = send(
            &app,
            post_json(
                "/auth/login",
                &json!({"email": "nobody@example.com", "password": "password123"}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_endpoint_without_token() {
        let app = test_app();

        let (status, body) = send(&app, get_with_token("/api/organisations", None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["statusCode"], 401);
    }

    #[tokio::test]
    async fn test_protected_endpoint_with_garbage_token() {
        let app = test_app();

        let (status, _) = send(
            &app,
            get_with_token("/api/organisations", Some("not-a-token")),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_organisations() {
        let app = test_app();

        let (token, _, _) = register(&app, "john.doe@example.com", "John").await;

        let (status, body) = send(&app, get_with_token("/api/organisations", Some(&token))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Organisations retrieved");
        let organisations = body["data"]["organisations"].as_array().unwrap();
        assert_eq!(organisations.len(), 1);
        assert_eq!(organisations[0]["name"], "John's Organisation");
    }

    #[tokio::test]
    async fn test_get_own_user_record() {
        let app = test_app();

        let (token, user_id, _) = register(&app, "john.doe@example.com", "John").await;

        let (status, body) = send(
            &app,
            get_with_token(&format!("/api/users/{user_id}"), Some(&token)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User record");
        assert_eq!(body["data"]["userId"], user_id.as_str());
    }

    #[tokio::test]
    async fn test_get_unknown_user_record() {
        let app = test_app();

        let (token, _, _) = register(&app, "john.doe@example.com", "John").await;

        let (status, body) = send(
            &app,
            get_with_token("/api/users/does-not-exist", Some(&token)),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 404);
    }

    #[tokio::test]
    async fn test_cross_organisation_access_scenario() {
        let app = test_app();

        let (alice_token, alice_id, _) = register(&app, "alice@example.com", "alice").await;
        let (bob_token, bob_id, bob_org) = register(&app, "bob@example.com", "bob").await;

        // Alice cannot read bob's organisation or his record
        let (status, _) = send(
            &app,
            get_with_token(&format!("/api/organisations/{bob_org}"), Some(&alice_token)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            &app,
            get_with_token(&format!("/api/users/{bob_id}"), Some(&alice_token)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // Bob adds alice to his organisation
        let (status, body) = send(
            &app,
            post_json(
                &format!("/api/organisations/{bob_org}/users"),
                &json!({"userId": alice_id}),
                Some(&bob_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User added to organisation successfully");

        // Now alice can read both
        let (status, body) = send(
            &app,
            get_with_token(&format!("/api/organisations/{bob_org}"), Some(&alice_token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "bob's Organisation");

        let (status, _) = send(
            &app,
            get_with_token(&format!("/api/users/{bob_id}"), Some(&alice_token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_member_permission_and_not_found() {
        let app = test_app();

        let (alice_token, alice_id, _) = register(&app, "alice@example.com", "alice").await;
        let (bob_token, _, bob_org) = register(&app, "bob@example.com", "bob").await;

        // Alice is not a member of bob's organisation
        let (status, _) = send(
            &app,
            post_json(
                &format!("/api/organisations/{bob_org}/users"),
                &json!({"userId": alice_id}),
                Some(&alice_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // Unknown organisation
        let (status, _) = send(
            &app,
            post_json(
                "/api/organisations/missing/users",
                &json!({"userId": alice_id}),
                Some(&bob_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Unknown target user
        let (status, _) = send(
            &app,
            post_json(
                &format!("/api/organisations/{bob_org}/users"),
                &json!({"userId": "missing"}),
                Some(&bob_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Missing userId field
        let (status, body) = send(
            &app,
            post_json(
                &format!("/api/organisations/{bob_org}/users"),
                &json!({}),
                Some(&bob_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "userId");
    }

    #[tokio::test]
    async fn test_create_organisation() {
        let app = test_app();

        let (token, _, _) = register(&app, "alice@example.com", "alice").await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/organisations",
                &json!({"name": "Acme", "description": "widgets"}),
                Some(&token),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Organisation created successfully");
        assert_eq!(body["data"]["name"], "Acme");

        // The creator is a member: the new organisation shows up in the list
        let (_, body) = send(&app, get_with_token("/api/organisations", Some(&token))).await;
        let organisations = body["data"]["organisations"].as_array().unwrap();
        assert_eq!(organisations.len(), 2);
    }

    #[tokio::test]
    async fn test_create_organisation_requires_name() {
        let app = test_app();

        let (token, _, _) = register(&app, "alice@example.com", "alice").await;

        let (status, body) = send(
            &app,
            post_json("/api/organisations", &json!({"name": ""}), Some(&token)),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = test_app();

        let (status, body) = send(&app, get_with_token("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, _) = send(&app, get_with_token("/live", None)).await;
        assert_eq!(status, StatusCode::OK);
    }
}
