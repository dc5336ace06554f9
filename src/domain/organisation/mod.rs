//! Organisation domain types

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{Organisation, OrgId};
pub use repository::OrganisationRepository;
pub use validation::validate_organisation_name;
