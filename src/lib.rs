//! Organisation Directory API
//!
//! A multi-tenant user and organisation directory with:
//! - Token-based authentication (register, login, bearer tokens)
//! - Per-user default organisations created at registration
//! - Organisation membership gating access to user and organisation records

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    auth::{JwtConfig, JwtService},
    directory::{DirectoryService, InMemoryDirectoryStore},
    user::Argon2Hasher,
};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    let tokens = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_hours,
    )));

    // One store backs both repository views, so registration writes are
    // atomic across users, organisations and memberships.
    let store = Arc::new(InMemoryDirectoryStore::new());
    let directory = Arc::new(DirectoryService::new(
        store.clone(),
        store,
        Arc::new(Argon2Hasher::new()),
        tokens.clone(),
    ));

    AppState::new(directory, tokens)
}
