//! Multi-criteria document matching.
//!
//! # Responsibility
//! - Define the ephemeral search request shape.
//! - Evaluate the criterion chain against a single document.
//!
//! # Invariants
//! - Criteria run in a fixed order: title, content, author, creation
//!   range. Each present criterion replaces the verdict of the previous
//!   one, so the last present criterion decides inclusion.
//! - A request with no criteria at all matches nothing.

use crate::model::document::Document;
use serde::{Deserialize, Serialize};

/// Ephemeral query value; each present field describes one criterion.
///
/// All fields are independently optional. A present-but-empty candidate
/// list is a criterion that matches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Exact-match title candidates. Despite the historical field name,
    /// no prefix matching happens; comparison is full string equality.
    pub title_prefixes: Option<Vec<String>>,
    /// Exact-match content candidates; full string equality, not substring.
    pub contains_contents: Option<Vec<String>>,
    /// Exact-match author-id candidates.
    pub author_ids: Option<Vec<String>>,
    /// Exclusive lower bound on `created`, epoch milliseconds.
    pub created_from: Option<i64>,
    /// Exclusive upper bound on `created`, epoch milliseconds.
    pub created_to: Option<i64>,
}

/// Evaluates the criterion chain for one document.
///
/// Each present criterion overwrites the verdict of the one before it
/// instead of combining with it. Callers depend on this historical
/// behavior, so the chain is kept literal rather than folded into a
/// conjunction.
///
/// A document with no author never satisfies the author criterion, and a
/// document with no creation time never satisfies the range criterion.
pub fn matches(document: &Document, request: &SearchRequest) -> bool {
    let mut result = false;

    if let Some(titles) = &request.title_prefixes {
        result = titles
            .iter()
            .any(|candidate| document.title.as_deref() == Some(candidate.as_str()));
    }

    if let Some(contents) = &request.contains_contents {
        result = contents
            .iter()
            .any(|candidate| document.content.as_deref() == Some(candidate.as_str()));
    }

    if let Some(author_ids) = &request.author_ids {
        result = author_ids
            .iter()
            .any(|candidate| document.author_id() == Some(candidate.as_str()));
    }

    if let (Some(from), Some(to)) = (request.created_from, request.created_to) {
        result = match document.created {
            Some(created) => created > from && created < to,
            None => false,
        };
    }

    result
}
