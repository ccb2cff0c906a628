//! Core domain logic for the in-memory document store.
//! This crate is the single source of truth for storage invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Author, Document, DocumentId};
pub use repo::document_repo::{
    DocumentRepository, InMemoryDocumentRepository, RepoError, RepoResult,
};
pub use search::query::{matches, SearchRequest};
pub use service::document_service::DocumentService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
