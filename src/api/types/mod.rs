//! Shared API types: errors, envelopes, DTOs, JSON handling

pub mod dto;
pub mod envelope;
pub mod error;
pub mod json;

pub use dto::{OrganisationResponse, UserResponse};
pub use envelope::SuccessResponse;
pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
