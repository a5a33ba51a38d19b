//! In-process document registry.
//!
//! The registry is append-only: documents are inserted once and never
//! removed or replaced. A single `RwLock` guards the map; a document is
//! fully built before the write lock is taken, so readers observe either
//! the state before a registration or the state after it.
//!
//! # Usage
//!
//! ```rust
//! use holon_core::{ClassificationLevel, DocumentId, EntityId};
//! use holon_docs::{ClassificationSource, DocumentProperties, DocumentRegistry};
//!
//! let registry = DocumentRegistry::new();
//! let doc = registry.register_document(
//!     DocumentProperties::new("Operations order", "SECRET"),
//!     EntityId::new("evt-1"),
//! );
//!
//! assert_eq!(registry.resolve_classification(&doc.id), ClassificationLevel::Secret);
//! assert_eq!(
//!     registry.resolve_classification(&DocumentId::new()),
//!     ClassificationLevel::Unclassified
//! );
//! ```

use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use holon_core::{ClassificationLevel, DocumentId, EntityId};

use crate::document::{Document, DocumentProperties};
use crate::Result;

// ============================================================================
// ClassificationSource
// ============================================================================

/// Resolves a document identifier to the classification it imposes.
///
/// Implementations must be total: an unknown identifier resolves to
/// [`ClassificationLevel::Unclassified`] rather than an error, so a broken
/// reference can never be told apart from an unclassified one.
pub trait ClassificationSource: Send + Sync {
    /// Classification level of `document_id`.
    fn resolve_classification(&self, document_id: &DocumentId) -> ClassificationLevel;
}

// ============================================================================
// DocumentRegistry
// ============================================================================

#[derive(Default)]
struct RegistryState {
    documents: HashMap<DocumentId, Arc<Document>>,
    order: Vec<DocumentId>,
}

/// Thread-safe, append-only store of authority documents.
#[derive(Default)]
pub struct DocumentRegistry {
    state: RwLock<RegistryState>,
}

impl DocumentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a document and returns it with its assigned identifier.
    ///
    /// Identifiers are pairwise distinct within a registry. Reference
    /// numbers are not checked for uniqueness.
    pub fn register_document(
        &self,
        properties: DocumentProperties,
        created_by_event_id: EntityId,
    ) -> Arc<Document> {
        let registered_at = Utc::now();
        let mut state = self.write();

        let mut id = DocumentId::new();
        while state.documents.contains_key(&id) {
            id = DocumentId::new();
        }

        let document = Arc::new(Document {
            id,
            created_by_event_id,
            registered_at,
            properties,
        });
        state.documents.insert(id, Arc::clone(&document));
        state.order.push(id);
        drop(state);

        log::debug!(
            "Registered document {id} '{}' ({})",
            document.title(),
            document.classification()
        );
        document
    }

    /// Validates `properties`, then registers them.
    ///
    /// For callers at the storage boundary that must reject malformed
    /// records before they are stored.
    pub fn try_register_document(
        &self,
        properties: DocumentProperties,
        created_by_event_id: EntityId,
    ) -> Result<Arc<Document>> {
        properties.validate()?;
        Ok(self.register_document(properties, created_by_event_id))
    }

    /// Looks up a document.
    pub fn get(&self, document_id: &DocumentId) -> Option<Arc<Document>> {
        self.read().documents.get(document_id).cloned()
    }

    /// All documents carrying `reference`, in registration order.
    pub fn find_by_reference_number(&self, reference: &str) -> Vec<Arc<Document>> {
        let state = self.read();
        state
            .order
            .iter()
            .filter_map(|id| state.documents.get(id))
            .filter(|doc| doc.has_reference_number(reference))
            .cloned()
            .collect()
    }

    /// Identifiers in registration order.
    pub fn ids(&self) -> Vec<DocumentId> {
        self.read().order.clone()
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.read().order.len()
    }

    /// Whether no document has been registered.
    pub fn is_empty(&self) -> bool {
        self.read().order.is_empty()
    }

    // Writers never leave the map half-updated, so a poisoned lock still
    // holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClassificationSource for DocumentRegistry {
    fn resolve_classification(&self, document_id: &DocumentId) -> ClassificationLevel {
        self.read()
            .documents
            .get(document_id)
            .map(|doc| doc.classification())
            .unwrap_or_default()
    }
}

impl fmt::Debug for DocumentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRegistry")
            .field("documents", &self.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
