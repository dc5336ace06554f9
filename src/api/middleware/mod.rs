//! Request middleware

pub mod user_auth;

pub use user_auth::RequireUser;
