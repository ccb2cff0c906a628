//! Search entry points.
//!
//! # Responsibility
//! - Expose the query shape and matching predicate used by the store.
//! - Keep criterion evaluation rules in one place.

pub mod query;
