//! Document use-case service.
//!
//! # Responsibility
//! - Provide stable upsert/lookup/search entry points for callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Service layer remains storage-agnostic.

use crate::model::document::{Author, Document};
use crate::repo::document_repo::{DocumentRepository, RepoResult};
use crate::search::query::SearchRequest;

/// Use-case service wrapper for document storage operations.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves a draft or update through the repository.
    pub fn save(&mut self, document: Document) -> RepoResult<Document> {
        self.repo.save(document)
    }

    /// Creates and stores a document from title, content and author.
    ///
    /// # Contract
    /// - The store assigns identity and creation time.
    /// - Returns the document as stored.
    pub fn create_document(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Option<Author>,
    ) -> RepoResult<Document> {
        let mut document = Document::draft(title, content);
        document.author = author;
        self.repo.save(document)
    }

    /// Gets one document by id.
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<Document>> {
        self.repo.find_by_id(id)
    }

    /// Searches stored documents with the given request.
    pub fn search(&self, request: &SearchRequest) -> RepoResult<Vec<Document>> {
        self.repo.search(request)
    }
}
