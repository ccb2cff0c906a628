//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate map-storage details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`InvalidArgument`) rather
//!   than panicking on bad input.

pub mod document_repo;
