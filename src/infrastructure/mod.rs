//! Infrastructure implementations: storage, crypto, tokens, logging

pub mod auth;
pub mod directory;
pub mod logging;
pub mod user;
