//! Domain entities, validation and repository contracts

pub mod error;
pub mod organisation;
pub mod user;

pub use error::{DomainError, FieldError};
