//! User style selections.
//!
//! The persisted form is a plain string per category: a style id or one of the
//! sentinels `random`, `culture-default` and `none`. Here the sentinels are
//! enum variants, and a sentinel that makes no sense for its category is
//! rejected when parsing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const RANDOM: &str = "random";
pub const CULTURE_DEFAULT: &str = "culture-default";
pub const NONE: &str = "none";

/// A selection string that cannot be used where it appears.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'none' is only valid for color palettes")]
    NoneNotAllowed,

    #[error("'culture-default' is not valid for color palettes")]
    CultureDefaultNotAllowed,

    #[error("'{0}' is reserved and cannot be used as a style id")]
    ReservedId(String),

    #[error("style id must not be empty")]
    EmptyId,
}

/// An explicit style id. Never empty and never one of the sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleId(String);

impl StyleId {
    /// Create a style id, rejecting the empty string and the sentinels.
    pub fn new(id: impl Into<String>) -> Result<Self, SelectionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SelectionError::EmptyId);
        }
        if matches!(id.as_str(), RANDOM | CULTURE_DEFAULT | NONE) {
            return Err(SelectionError::ReservedId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Choice for the artistic or composition category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StyleChoice {
    #[default]
    Random,
    /// Use the entity culture's default, falling back to random.
    CultureDefault,
    Explicit(StyleId),
}

impl StyleChoice {
    /// Create an explicit choice. Sentinel strings are rejected.
    pub fn explicit(id: impl Into<String>) -> Result<Self, SelectionError> {
        StyleId::new(id).map(StyleChoice::Explicit)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StyleChoice::Random => RANDOM,
            StyleChoice::CultureDefault => CULTURE_DEFAULT,
            StyleChoice::Explicit(id) => id.as_str(),
        }
    }
}

impl FromStr for StyleChoice {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | RANDOM => Ok(StyleChoice::Random),
            CULTURE_DEFAULT => Ok(StyleChoice::CultureDefault),
            NONE => Err(SelectionError::NoneNotAllowed),
            id => StyleChoice::explicit(id),
        }
    }
}

impl TryFrom<String> for StyleChoice {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StyleChoice> for String {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Explicit(id) => id.into_string(),
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for StyleChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choice for the color palette category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaletteChoice {
    #[default]
    Random,
    /// No palette at all; never falls back.
    NoPalette,
    Explicit(StyleId),
}

impl PaletteChoice {
    /// Create an explicit choice. Sentinel strings are rejected.
    pub fn explicit(id: impl Into<String>) -> Result<Self, SelectionError> {
        StyleId::new(id).map(PaletteChoice::Explicit)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaletteChoice::Random => RANDOM,
            PaletteChoice::NoPalette => NONE,
            PaletteChoice::Explicit(id) => id.as_str(),
        }
    }
}

impl FromStr for PaletteChoice {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | RANDOM => Ok(PaletteChoice::Random),
            NONE => Ok(PaletteChoice::NoPalette),
            CULTURE_DEFAULT => Err(SelectionError::CultureDefaultNotAllowed),
            id => PaletteChoice::explicit(id),
        }
    }
}

impl TryFrom<String> for PaletteChoice {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaletteChoice> for String {
    fn from(choice: PaletteChoice) -> Self {
        match choice {
            PaletteChoice::Explicit(id) => id.into_string(),
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PaletteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user asked for in each style category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSelection {
    #[serde(default)]
    pub artistic_style_id: StyleChoice,
    #[serde(default)]
    pub composition_style_id: StyleChoice,
    #[serde(default)]
    pub color_palette_id: PaletteChoice,
}

impl StyleSelection {
    /// Random in every category.
    pub fn random() -> Self {
        Self::default()
    }

    /// Defer artistic and composition choices to the entity's culture.
    pub fn culture_default() -> Self {
        Self {
            artistic_style_id: StyleChoice::CultureDefault,
            composition_style_id: StyleChoice::CultureDefault,
            color_palette_id: PaletteChoice::Random,
        }
    }

    /// Set the artistic choice.
    pub fn with_artistic(mut self, choice: StyleChoice) -> Self {
        self.artistic_style_id = choice;
        self
    }

    /// Set the composition choice.
    pub fn with_composition(mut self, choice: StyleChoice) -> Self {
        self.composition_style_id = choice;
        self
    }

    /// Set the color palette choice.
    pub fn with_palette(mut self, choice: PaletteChoice) -> Self {
        self.color_palette_id = choice;
        self
    }
}
