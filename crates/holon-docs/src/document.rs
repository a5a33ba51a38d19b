//! Authority documents.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use holon_core::{ClassificationLevel, DocumentId, EntityId};

use crate::Result;

/// Date range during which a document is in force. Either end may be open.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveDates {
    /// First day in force.
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
    /// Last day in force.
    #[serde(default)]
    pub effective_until: Option<NaiveDate>,
}

impl EffectiveDates {
    /// Whether `date` falls inside the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.effective_from.is_none_or(|from| from <= date)
            && self.effective_until.is_none_or(|until| date <= until)
    }
}

/// Caller-supplied properties of a document, before registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentProperties {
    /// Free-text classification label (e.g. "SECRET//NOFORN").
    ///
    /// The only source of truth for the clearance an entity derived from
    /// this document requires.
    #[serde(default)]
    pub classification_metadata: String,
    /// Human-readable title.
    pub title: String,
    /// Kind of document (e.g. "directive", "order").
    #[serde(default)]
    pub document_type: String,
    /// Version string, if versioned.
    #[serde(default)]
    pub version: Option<String>,
    /// External reference numbers. Not required to be unique.
    #[serde(default)]
    pub reference_numbers: Vec<String>,
    /// When the document is in force.
    #[serde(default)]
    pub effective_dates: EffectiveDates,
}

impl DocumentProperties {
    /// Creates properties with a title and classification label.
    pub fn new(title: impl Into<String>, classification_metadata: impl Into<String>) -> Self {
        Self {
            classification_metadata: classification_metadata.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the document type.
    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    /// Sets the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a reference number.
    pub fn with_reference_number(mut self, reference: impl Into<String>) -> Self {
        self.reference_numbers.push(reference.into());
        self
    }

    /// Sets the effective date range.
    pub fn with_effective_dates(
        mut self,
        effective_from: Option<NaiveDate>,
        effective_until: Option<NaiveDate>,
    ) -> Self {
        self.effective_dates = EffectiveDates {
            effective_from,
            effective_until,
        };
        self
    }

    /// Checks the record is well formed.
    ///
    /// Rejects an empty title and an inverted effective-date range. The
    /// classification label is free text and is never rejected.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(holon_core::Error::validation_field("title", "must not be empty").into());
        }
        if let EffectiveDates {
            effective_from: Some(from),
            effective_until: Some(until),
        } = self.effective_dates
            && from > until
        {
            return Err(holon_core::Error::validation_field(
                "effective_dates",
                format!("effective_from {from} is after effective_until {until}"),
            )
            .into());
        }
        Ok(())
    }
}

/// A registered authority document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Registry-assigned identifier.
    pub id: DocumentId,
    /// Event that caused the registration.
    pub created_by_event_id: EntityId,
    /// When the registry stored the document.
    pub registered_at: DateTime<Utc>,
    /// Caller-supplied properties.
    #[serde(flatten)]
    pub properties: DocumentProperties,
}

impl Document {
    /// The raw classification label.
    pub fn classification_metadata(&self) -> &str {
        &self.properties.classification_metadata
    }

    /// The classification level parsed from the label.
    pub fn classification(&self) -> ClassificationLevel {
        ClassificationLevel::from_label(&self.properties.classification_metadata)
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.properties.title
    }

    /// Whether the document carries `reference` among its reference numbers.
    pub fn has_reference_number(&self, reference: &str) -> bool {
        self.properties
            .reference_numbers
            .iter()
            .any(|r| r == reference)
    }
}
