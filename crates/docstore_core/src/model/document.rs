//! Document domain model.
//!
//! # Responsibility
//! - Define the canonical stored record and its embedded author value.
//! - Keep every field optional so callers can submit partial drafts.
//!
//! # Invariants
//! - `id` is assigned at most once and never reassigned by the store.
//! - `created` reflects the first successful save and survives updates.

use serde::{Deserialize, Serialize};

/// Stable identifier for stored documents.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are UUIDv4 strings generated by the store at first save.
pub type DocumentId = String;

/// Identity of a document's creator, embedded by value inside a document.
///
/// Authors have no independent lifecycle in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Semantic identifier of a person; search compares it exactly.
    pub id: String,
    /// Display name; not consulted by any matching rule.
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Canonical stored record.
///
/// A draft submitted to the store may carry as little as a title; the
/// store fills in identity and creation time on first save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Globally unique within one store; `None` until first save.
    pub id: Option<DocumentId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
    /// Unix epoch milliseconds of the first save; never modified by
    /// later saves under the same id.
    pub created: Option<i64>,
}

impl Document {
    /// Creates an unsaved draft with the given title and content.
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            content: Some(content.into()),
            author: None,
            created: None,
        }
    }

    /// Returns the embedded author's id, if an author is set.
    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.id.as_str())
    }
}
