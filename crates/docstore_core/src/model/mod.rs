//! Domain model for the document store.
//!
//! # Responsibility
//! - Define canonical data structures used by storage and search.
//! - Keep one document-centric shape shared by every operation.
//!
//! # Invariants
//! - Every stored object is identified by a stable `DocumentId`.
//! - Identity and creation time are owned by the store, not callers.

pub mod document;
