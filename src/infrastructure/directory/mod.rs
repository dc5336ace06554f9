//! Directory orchestration service and storage

pub mod service;
pub mod store;

pub use service::{
    Authenticated, CreateOrganisationRequest, DirectoryService, Registration,
};
pub use store::InMemoryDirectoryStore;
