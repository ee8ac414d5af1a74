//! Prominence tiers.

use serde::{Deserialize, Serialize};

/// Ordinal significance tier of an entity, from forgotten to mythic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Prominence {
    Forgotten,
    Marginal,
    #[default]
    Recognized,
    Renowned,
    Mythic,
}

impl Prominence {
    pub fn all() -> &'static [Prominence] {
        &[
            Prominence::Forgotten,
            Prominence::Marginal,
            Prominence::Recognized,
            Prominence::Renowned,
            Prominence::Mythic,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prominence::Forgotten => "forgotten",
            Prominence::Marginal => "marginal",
            Prominence::Recognized => "recognized",
            Prominence::Renowned => "renowned",
            Prominence::Mythic => "mythic",
        }
    }

    /// Check whether this tier is at or above `min`.
    pub fn at_least(&self, min: Prominence) -> bool {
        *self >= min
    }
}

impl std::fmt::Display for Prominence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
