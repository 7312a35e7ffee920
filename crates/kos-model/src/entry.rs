//! Documented kOS symbols as produced by the documentation scraper.
//!
//! Field names mirror the JSON corpus schema (`camelCase`), so an external
//! loader can deserialize the corpus straight into these types. The core
//! never reads or writes the JSON itself.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Entry type for kOS documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocEntryKind {
    Structure,
    Suffix,
    Function,
    Keyword,
    Constant,
    Command,
}

/// Access mode for suffixes and bound methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    #[serde(rename = "get")]
    Get,
    #[serde(rename = "set")]
    Set,
    #[serde(rename = "get/set")]
    GetSet,
    #[serde(rename = "method")]
    Method,
}

/// A single entry in the kOS documentation index.
///
/// `id` is either a bare name (`VESSEL`, `HEADING`) or a
/// `PARENT:NAME` pair for suffixes (`VESSEL:ALTITUDE`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocEntryKind,
    #[serde(default)]
    pub parent_structure: Option<String>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub access: Option<AccessMode>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub source_ref: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub deprecation_note: Option<String>,
}

impl DocEntry {
    /// Create a minimal entry, validating the identifying fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: DocEntryKind,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidEntryId(id));
        }
        if name.trim().is_empty() {
            return Err(ModelError::InvalidEntryName(name));
        }
        Ok(Self {
            id,
            name,
            kind,
            parent_structure: None,
            return_type: None,
            access: None,
            signature: None,
            description: None,
            snippet: None,
            source_ref: None,
            tags: Vec::new(),
            aliases: Vec::new(),
            related: Vec::new(),
            deprecated: false,
            deprecation_note: None,
        })
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_structure = Some(parent.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source_ref(mut self, source_ref: impl Into<String>) -> Self {
        self.source_ref = Some(source_ref.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// The `:`-separated components of the entry id.
    pub fn id_segments(&self) -> impl Iterator<Item = &str> {
        self.id.split(':').filter(|segment| !segment.is_empty())
    }
}

/// The complete documentation corpus as shipped by the scraper.
///
/// The envelope metadata travels with the entries so consumers can pin
/// content versions; the core only cares about `entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocIndexFile {
    pub schema_version: String,
    pub content_version: String,
    pub kos_min_version: String,
    pub generated_at: String,
    pub source_url: String,
    #[serde(default)]
    pub entries: Vec<DocEntry>,
}
