//! Entity definitions for the simulated world.

mod prominence;

pub use prominence::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an entity in the simulated world.
///
/// Ids are assigned by the simulation and kept as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind tag of an entity (e.g. "character", "location", "artifact").
///
/// Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKind(pub String);

impl EntityKind {
    /// Wrap a kind tag.
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The slice of an entity the enrichment routines care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture_id: Option<String>,
    #[serde(default)]
    pub prominence: Prominence,
}

impl EntityRef {
    /// Create an entity reference with a fresh id and no culture.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            kind: EntityKind::new(kind),
            culture_id: None,
            prominence: Prominence::default(),
        }
    }

    /// Set the culture.
    pub fn with_culture(mut self, culture_id: impl Into<String>) -> Self {
        self.culture_id = Some(culture_id.into());
        self
    }

    /// Set the prominence tier.
    pub fn with_prominence(mut self, prominence: Prominence) -> Self {
        self.prominence = prominence;
        self
    }
}
