//! Entity types: holons, relationships, and events.
//!
//! All three kinds carry a list of source documents establishing their
//! provenance. The [`Provenance`] trait exposes exactly what the access
//! engine may look at; the opaque [`Properties`] payload is not part of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{DocumentId, EntityId};

// ============================================================================
// EntityKind / EntityStatus
// ============================================================================

/// The three kinds of entity the engine decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A tracked organizational or operational object.
    Holon,
    /// A typed link between two holons.
    Relationship,
    /// An entry in the append-only event log.
    Event,
}

impl EntityKind {
    /// Every entity kind.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Holon,
        EntityKind::Relationship,
        EntityKind::Event,
    ];

    /// Configuration name (snake_case).
    pub fn name(self) -> &'static str {
        match self {
            Self::Holon => "holon",
            Self::Relationship => "relationship",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle status of a holon or relationship.
///
/// Managed by the storage layer. The engine never changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// Live entity.
    #[default]
    Active,
    /// Soft-deleted or retired entity.
    Inactive,
}

// ============================================================================
// HolonType
// ============================================================================

/// Type tag of a holon.
///
/// Common types are first-class variants; anything else is kept verbatim
/// in `Custom`. Serialized as a plain string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HolonType {
    /// A person.
    Person,
    /// A position within an organization.
    Position,
    /// An organization or unit.
    Organization,
    /// A mission or objective.
    Mission,
    /// A document-like record.
    Document,
    /// A unit of work.
    Task,
    /// Domain-specific type not covered above.
    Custom(String),
}

impl HolonType {
    /// Returns the type name as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::Person => "person",
            Self::Position => "position",
            Self::Organization => "organization",
            Self::Mission => "mission",
            Self::Document => "document",
            Self::Task => "task",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for HolonType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "person" => Self::Person,
            "position" => Self::Position,
            "organization" => Self::Organization,
            "mission" => Self::Mission,
            "document" => Self::Document,
            "task" => Self::Task,
            _ => Self::Custom(s),
        }
    }
}

impl From<&str> for HolonType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<HolonType> for String {
    fn from(t: HolonType) -> Self {
        match t {
            HolonType::Custom(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for HolonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Opaque, free-form entity payload.
///
/// Carries whatever the ingestion layer attached. Access decisions never
/// read it, including any `classificationMetadata` an entity declares about
/// itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(serde_json::Map<String, serde_json::Value>);

impl Properties {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Properties {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

// ============================================================================
// Provenance trait
// ============================================================================

/// What the access engine may inspect on an entity.
pub trait Provenance {
    /// The entity's identifier.
    fn entity_id(&self) -> &EntityId;

    /// Which kind of entity this is.
    fn kind(&self) -> EntityKind;

    /// Documents establishing the entity's authority. May be empty.
    fn source_documents(&self) -> &[DocumentId];
}

// ============================================================================
// Holon
// ============================================================================

/// A typed record representing a tracked object (person, mission, task...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holon {
    /// Unique identifier.
    pub id: EntityId,
    /// Type tag.
    pub holon_type: HolonType,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EntityStatus,
    /// Opaque payload.
    #[serde(default)]
    pub properties: Properties,
    /// Authority documents.
    #[serde(default)]
    pub source_documents: Vec<DocumentId>,
}

impl Holon {
    /// Creates an active holon with no properties or source documents.
    pub fn new(id: impl Into<EntityId>, holon_type: impl Into<HolonType>) -> Self {
        Self {
            id: id.into(),
            holon_type: holon_type.into(),
            status: EntityStatus::default(),
            properties: Properties::new(),
            source_documents: Vec::new(),
        }
    }

    /// Adds a source document.
    pub fn with_source_document(mut self, document: DocumentId) -> Self {
        self.source_documents.push(document);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets a payload property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Whether the holon is active.
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }
}

impl Provenance for Holon {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Holon
    }

    fn source_documents(&self) -> &[DocumentId] {
        &self.source_documents
    }
}

// ============================================================================
// Relationship
// ============================================================================

/// A typed, directed link between two entities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier.
    pub id: EntityId,
    /// Type tag (e.g. "reports_to", "assigned_to").
    pub relationship_type: String,
    /// Source entity.
    pub source_id: EntityId,
    /// Target entity.
    pub target_id: EntityId,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EntityStatus,
    /// Opaque payload.
    #[serde(default)]
    pub properties: Properties,
    /// Authority documents.
    #[serde(default)]
    pub source_documents: Vec<DocumentId>,
}

impl Relationship {
    /// Creates an active relationship with no source documents.
    pub fn new(
        id: impl Into<EntityId>,
        relationship_type: impl Into<String>,
        source_id: impl Into<EntityId>,
        target_id: impl Into<EntityId>,
    ) -> Self {
        Self {
            id: id.into(),
            relationship_type: relationship_type.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            status: EntityStatus::default(),
            properties: Properties::new(),
            source_documents: Vec::new(),
        }
    }

    /// Adds a source document.
    pub fn with_source_document(mut self, document: DocumentId) -> Self {
        self.source_documents.push(document);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }
}

impl Provenance for Relationship {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Relationship
    }

    fn source_documents(&self) -> &[DocumentId] {
        &self.source_documents
    }
}

// ============================================================================
// Event
// ============================================================================

/// An entry in the append-only event log.
///
/// Unlike holons and relationships, an event has at most one source
/// document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EntityId,
    /// Type tag (e.g. "holon_created").
    pub event_type: String,
    /// User or system that caused the event.
    pub actor: String,
    /// Entities the event is about.
    #[serde(default)]
    pub subjects: Vec<EntityId>,
    /// When the event happened.
    pub occurred_at: DateTime<Utc>,
    /// Authority document, if any.
    #[serde(default)]
    pub source_document: Option<DocumentId>,
    /// Opaque payload.
    #[serde(default)]
    pub payload: Properties,
}

impl Event {
    /// Creates an event with no subjects, document or payload.
    pub fn new(
        id: impl Into<EntityId>,
        event_type: impl Into<String>,
        actor: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            event_type: event_type.into(),
            actor: actor.into(),
            subjects: Vec::new(),
            occurred_at,
            source_document: None,
            payload: Properties::new(),
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: impl Into<EntityId>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Sets the source document.
    pub fn with_source_document(mut self, document: DocumentId) -> Self {
        self.source_document = Some(document);
        self
    }
}

impl Provenance for Event {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Event
    }

    fn source_documents(&self) -> &[DocumentId] {
        self.source_document.as_slice()
    }
}

// ============================================================================
// Tests
// ============================================================================
