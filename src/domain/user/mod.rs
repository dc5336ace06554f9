//! User domain types

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{User, UserId};
pub use repository::{RegistrationStore, UserRepository};
pub use validation::{normalize_email, validate_registration, RegistrationFields};
