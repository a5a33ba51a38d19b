//! Scenario files.
//!
//! A scenario is a TOML snapshot of an entity store: authority documents,
//! the holons, relationships and events derived from them, and the users
//! whose access is being inspected. Entities reference documents by a local
//! `key`; loading registers the documents in file order and binds each key
//! to the identifier the registry assigned.
//!
//! ```toml
//! [[documents]]
//! key = "d1"
//! title = "Operations order"
//! classification_metadata = "SECRET"
//!
//! [[holons]]
//! id = "H1"
//! type = "mission"
//! documents = ["d1"]
//!
//! [[users]]
//! user_id = "U1"
//! clearance_level = "unclassified"
//! roles = ["analyst"]
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use holon_core::{DocumentId, EntityId, EntityStatus, Event, Holon, Relationship, UserContext};
use holon_docs::{DocumentProperties, DocumentRegistry};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Parsed scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Authority documents, registered in order.
    pub documents: Vec<DocumentEntry>,
    /// Holons.
    pub holons: Vec<HolonEntry>,
    /// Relationships.
    pub relationships: Vec<RelationshipEntry>,
    /// Events.
    pub events: Vec<EventEntry>,
    /// Users.
    pub users: Vec<UserContext>,
}

/// A document declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentEntry {
    /// Local key entities use to reference this document.
    pub key: String,
    /// Event recorded as the document's creator.
    #[serde(default = "default_created_by")]
    pub created_by: String,
    /// Document properties.
    #[serde(flatten)]
    pub properties: DocumentProperties,
}

fn default_created_by() -> String {
    "scenario".to_string()
}

/// A holon declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct HolonEntry {
    /// Entity id.
    pub id: String,
    /// Holon type name.
    #[serde(rename = "type")]
    pub holon_type: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EntityStatus,
    /// Source document keys.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// A relationship declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipEntry {
    /// Entity id.
    pub id: String,
    /// Relationship type name.
    #[serde(rename = "type")]
    pub relationship_type: String,
    /// Source holon id.
    pub source: String,
    /// Target holon id.
    pub target: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EntityStatus,
    /// Source document keys.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// An event declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntry {
    /// Entity id.
    pub id: String,
    /// Event type name.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who submitted the event.
    #[serde(default)]
    pub actor: String,
    /// RFC 3339 timestamp. Defaults to load time.
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Affected entity ids.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Source document key.
    #[serde(default)]
    pub document: Option<String>,
}

impl Scenario {
    /// Parses a scenario from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a scenario file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| holon_core::Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
    }

    /// Registers the documents in `registry` and builds the entities.
    ///
    /// Document properties are validated before registration. A key no
    /// document declares is bound to a fresh identifier the registry does
    /// not know, so references through it resolve to `Unclassified`.
    pub fn load_into(&self, registry: &DocumentRegistry) -> Result<LoadedScenario> {
        let mut keys = KeyBindings::default();

        for entry in &self.documents {
            if keys.bound.contains_key(&entry.key) {
                return Err(Error::DuplicateDocumentKey(entry.key.clone()));
            }
            let document = registry.try_register_document(
                entry.properties.clone(),
                EntityId::new(entry.created_by.as_str()),
            )?;
            keys.bound.insert(entry.key.clone(), document.id);
        }

        let holons = self
            .holons
            .iter()
            .map(|entry| {
                let holon = Holon::new(entry.id.as_str(), entry.holon_type.as_str())
                    .with_status(entry.status);
                entry
                    .documents
                    .iter()
                    .fold(holon, |h, key| h.with_source_document(keys.resolve(key)))
            })
            .collect();

        let relationships = self
            .relationships
            .iter()
            .map(|entry| {
                let rel = Relationship::new(
                    entry.id.as_str(),
                    entry.relationship_type.as_str(),
                    entry.source.as_str(),
                    entry.target.as_str(),
                )
                .with_status(entry.status);
                entry
                    .documents
                    .iter()
                    .fold(rel, |r, key| r.with_source_document(keys.resolve(key)))
            })
            .collect();

        let loaded_at = Utc::now();
        let events = self
            .events
            .iter()
            .map(|entry| {
                let mut event = Event::new(
                    entry.id.as_str(),
                    entry.event_type.as_str(),
                    entry.actor.as_str(),
                    entry.occurred_at.unwrap_or(loaded_at),
                );
                for subject in &entry.subjects {
                    event = event.with_subject(subject.as_str());
                }
                match &entry.document {
                    Some(key) => event.with_source_document(keys.resolve(key)),
                    None => event,
                }
            })
            .collect();

        Ok(LoadedScenario {
            holons,
            relationships,
            events,
            users: self.users.clone(),
            document_ids: keys.bound,
        })
    }
}

#[derive(Default)]
struct KeyBindings {
    bound: HashMap<String, DocumentId>,
}

impl KeyBindings {
    fn resolve(&mut self, key: &str) -> DocumentId {
        if let Some(id) = self.bound.get(key) {
            return *id;
        }
        let id = DocumentId::new();
        log::warn!("Document key '{key}' is not declared; treating it as unresolved");
        self.bound.insert(key.to_string(), id);
        id
    }
}

/// A scenario after its documents have been registered.
#[derive(Debug, Clone)]
pub struct LoadedScenario {
    /// Holons in file order.
    pub holons: Vec<Holon>,
    /// Relationships in file order.
    pub relationships: Vec<Relationship>,
    /// Events in file order.
    pub events: Vec<Event>,
    /// Declared users.
    pub users: Vec<UserContext>,
    /// Identifier bound to every document key, declared or not.
    pub document_ids: HashMap<String, DocumentId>,
}

impl LoadedScenario {
    /// Looks up a declared user.
    pub fn user(&self, user_id: &str) -> Result<&UserContext> {
        self.users
            .iter()
            .find(|u| u.user_id == user_id)
            .ok_or_else(|| Error::UnknownUser(user_id.to_string()))
    }
}
