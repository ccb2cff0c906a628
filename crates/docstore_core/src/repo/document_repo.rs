//! Document repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide upsert/lookup/search APIs over the owned document map.
//! - Keep identity and creation-time rules inside the storage boundary.
//!
//! # Invariants
//! - At most one stored entry per id.
//! - A stored document's `created` is fixed at first save; later saves
//!   under the same id cannot change it.
//! - Lookups for unknown ids are not errors.

use crate::model::document::{Document, DocumentId};
use crate::search::query::{matches, SearchRequest};
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for document storage operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller-supplied input violates the operation contract.
    InvalidArgument(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for document upsert, lookup and search.
pub trait DocumentRepository {
    /// Inserts or updates a document, returning it as stored.
    fn save(&mut self, document: Document) -> RepoResult<Document>;
    /// Gets one document by id; unknown ids yield `Ok(None)`.
    fn find_by_id(&self, id: &str) -> RepoResult<Option<Document>>;
    /// Returns all stored documents satisfying the request, in the
    /// map's unspecified iteration order.
    fn search(&self, request: &SearchRequest) -> RepoResult<Vec<Document>>;
}

/// Heap-backed repository owning its document map for the process
/// lifetime. Single-threaded contract; callers embedding this in a
/// concurrent environment must add their own synchronization.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    storage: HashMap<DocumentId, Document>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn save(&mut self, mut document: Document) -> RepoResult<Document> {
        let id = match document.id.clone() {
            None => {
                let id = Uuid::new_v4().to_string();
                document.id = Some(id.clone());
                document.created = Some(now_epoch_ms());
                id
            }
            Some(id) => {
                if id.trim().is_empty() {
                    return Err(RepoError::InvalidArgument(
                        "document id cannot be blank".to_string(),
                    ));
                }
                if let Some(existing) = self.storage.get(&id) {
                    // Upsert keeps the original creation time, whatever
                    // the caller supplied.
                    document.created = existing.created;
                }
                id
            }
        };

        self.storage.insert(id.clone(), document.clone());
        debug!("event=document_saved module=repo status=ok id={id}");
        Ok(document)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Document>> {
        Ok(self.storage.get(id).cloned())
    }

    fn search(&self, request: &SearchRequest) -> RepoResult<Vec<Document>> {
        let hits: Vec<Document> = self
            .storage
            .values()
            .filter(|document| matches(document, request))
            .cloned()
            .collect();

        debug!(
            "event=document_search module=repo status=ok hits={} stored={}",
            hits.len(),
            self.storage.len()
        );
        Ok(hits)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}
