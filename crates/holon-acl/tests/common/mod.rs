//! Common test utilities for holon-acl integration tests.

use std::sync::Arc;

use holon_acl::AccessControlEngine;
use holon_core::{ClassificationLevel, DocumentId, EntityId, Role, UserContext};
use holon_docs::{DocumentProperties, DocumentRegistry};

/// Test harness holding a shared registry and an engine over it.
pub struct TestHarness {
    /// Registry the engine resolves documents against
    pub registry: Arc<DocumentRegistry>,
    /// Engine with the default policy
    pub engine: AccessControlEngine,
}

impl TestHarness {
    /// Creates a harness with an empty registry.
    pub fn new() -> Self {
        let registry = Arc::new(DocumentRegistry::new());
        let engine = AccessControlEngine::new(Arc::clone(&registry));
        Self { registry, engine }
    }

    /// Registers a document with the given classification label.
    pub fn document(&self, label: &str) -> DocumentId {
        self.registry
            .register_document(
                DocumentProperties::new(format!("{label} directive"), label)
                    .with_document_type("directive"),
                EntityId::new("evt-seed"),
            )
            .id
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a user with the given clearance and roles.
pub fn user(id: &str, clearance: ClassificationLevel, roles: &[Role]) -> UserContext {
    UserContext::new(id, clearance).with_roles(roles.iter().copied())
}
