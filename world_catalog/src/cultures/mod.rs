//! Cultures and their style defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A culture of the simulated world, with its visual identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Culture {
    pub id: String,
    pub name: String,

    /// Keywords appended to image prompts for entities of this culture.
    #[serde(default)]
    pub style_keywords: Vec<String>,

    /// Artistic style used when the selection defers to the culture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_artistic_style_id: Option<String>,

    /// Entity kind -> composition style id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_composition_styles: Option<BTreeMap<String, String>>,
}

impl Culture {
    /// Create a culture with no keywords or defaults.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            style_keywords: Vec::new(),
            default_artistic_style_id: None,
            default_composition_styles: None,
        }
    }

    /// Add a style keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.style_keywords.push(keyword.into());
        self
    }

    /// Set the default artistic style.
    pub fn with_default_artistic_style(mut self, style_id: impl Into<String>) -> Self {
        self.default_artistic_style_id = Some(style_id.into());
        self
    }

    /// Set the default composition style for one entity kind.
    pub fn with_default_composition(
        mut self,
        kind: impl Into<String>,
        style_id: impl Into<String>,
    ) -> Self {
        self.default_composition_styles
            .get_or_insert_with(BTreeMap::new)
            .insert(kind.into(), style_id.into());
        self
    }

    /// Composition style id this culture prefers for `kind`, if any.
    pub fn default_composition_for(&self, kind: &str) -> Option<&str> {
        self.default_composition_styles
            .as_ref()
            .and_then(|defaults| defaults.get(kind))
            .map(String::as_str)
    }
}

/// Find a culture by id. A missing id never matches.
pub fn find_culture<'a>(cultures: &'a [Culture], id: Option<&str>) -> Option<&'a Culture> {
    let id = id?;
    cultures.iter().find(|c| c.id == id)
}
