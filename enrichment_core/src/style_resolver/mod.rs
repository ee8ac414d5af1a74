//! Style Resolver - turns a [`StyleSelection`] into concrete style records.
//!
//! Each category resolves independently:
//! 1. **Random**: uniform pick from the category's candidates
//! 2. **Culture default**: the entity culture's configured id, else random
//! 3. **Explicit**: lookup by id, `None` when the id is unknown
//!
//! Composition candidates for random picks are limited to styles suitable for
//! the entity kind. Culture defaults and explicit ids look up the full list.
//! Resolution never fails; an empty category resolves to `None`.

mod selection;

pub use selection::*;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use world_catalog::{
    find_culture, CompositionStyle, Culture, EntityRef, StyleLibrary, StyleRecord,
    WorldStyleConfig,
};

/// The concrete styles chosen for one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub artistic_style: Option<StyleRecord>,
    pub composition_style: Option<CompositionStyle>,
    pub color_palette: Option<StyleRecord>,
    /// Copied from the entity's culture; empty when there is none.
    pub culture_keywords: Vec<String>,
}

/// Resolves selections against a style library and a set of cultures.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    library: &'a StyleLibrary,
    cultures: &'a [Culture],
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver over a style library and a set of cultures.
    pub fn new(library: &'a StyleLibrary, cultures: &'a [Culture]) -> Self {
        Self { library, cultures }
    }

    /// Create a resolver over a loaded configuration.
    pub fn from_config(config: &'a WorldStyleConfig) -> Self {
        Self::new(&config.style_library, &config.cultures)
    }

    /// Resolve using the thread-local generator for random picks.
    ///
    /// Random and culture-default fallback paths sample anew on every call.
    pub fn resolve(
        &self,
        selection: &StyleSelection,
        culture_id: Option<&str>,
        entity_kind: &str,
    ) -> ResolvedStyle {
        self.resolve_with_rng(selection, culture_id, entity_kind, &mut rand::thread_rng())
    }

    /// Resolve for an entity, using its culture and kind.
    pub fn resolve_for_entity(
        &self,
        selection: &StyleSelection,
        entity: &EntityRef,
    ) -> ResolvedStyle {
        self.resolve(selection, entity.culture_id.as_deref(), entity.kind.as_str())
    }

    /// Resolve with a caller-supplied generator.
    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        selection: &StyleSelection,
        culture_id: Option<&str>,
        entity_kind: &str,
        rng: &mut R,
    ) -> ResolvedStyle {
        let culture = find_culture(self.cultures, culture_id);
        if culture.is_none() {
            if let Some(id) = culture_id {
                debug!("no culture '{}', resolving without culture defaults", id);
            }
        }

        ResolvedStyle {
            artistic_style: self.resolve_artistic(&selection.artistic_style_id, culture, rng),
            composition_style: self.resolve_composition(
                &selection.composition_style_id,
                culture,
                entity_kind,
                rng,
            ),
            color_palette: self.resolve_palette(&selection.color_palette_id, rng),
            culture_keywords: culture
                .map(|c| c.style_keywords.clone())
                .unwrap_or_default(),
        }
    }

    fn resolve_artistic<R: Rng + ?Sized>(
        &self,
        choice: &StyleChoice,
        culture: Option<&Culture>,
        rng: &mut R,
    ) -> Option<StyleRecord> {
        let styles = &self.library.artistic_styles;
        match choice {
            StyleChoice::Random => styles.choose(rng).cloned(),
            StyleChoice::CultureDefault => {
                let default = culture
                    .and_then(|c| c.default_artistic_style_id.as_deref())
                    .and_then(|id| self.library.artistic_style(id));
                match default {
                    Some(style) => Some(style.clone()),
                    None => {
                        debug!("no usable culture default artistic style, picking at random");
                        styles.choose(rng).cloned()
                    }
                }
            }
            StyleChoice::Explicit(id) => {
                let style = self.library.artistic_style(id.as_str()).cloned();
                if style.is_none() {
                    warn!("unknown artistic style '{}'", id);
                }
                style
            }
        }
    }

    fn resolve_composition<R: Rng + ?Sized>(
        &self,
        choice: &StyleChoice,
        culture: Option<&Culture>,
        entity_kind: &str,
        rng: &mut R,
    ) -> Option<CompositionStyle> {
        let suitable = self.library.compositions_for_kind(entity_kind);
        match choice {
            StyleChoice::Random => suitable.choose(rng).map(|s| (*s).clone()),
            StyleChoice::CultureDefault => {
                // Culture defaults are looked up in the full list, so they
                // bypass kind filtering. Unclear whether that is intended.
                let default = culture
                    .and_then(|c| c.default_composition_for(entity_kind))
                    .and_then(|id| self.library.composition_style(id));
                match default {
                    Some(style) => Some(style.clone()),
                    None => {
                        debug!(
                            "no usable culture default composition for '{}', picking at random",
                            entity_kind
                        );
                        suitable.choose(rng).map(|s| (*s).clone())
                    }
                }
            }
            StyleChoice::Explicit(id) => {
                let style = self.library.composition_style(id.as_str()).cloned();
                if style.is_none() {
                    warn!("unknown composition style '{}'", id);
                }
                style
            }
        }
    }

    fn resolve_palette<R: Rng + ?Sized>(
        &self,
        choice: &PaletteChoice,
        rng: &mut R,
    ) -> Option<StyleRecord> {
        match choice {
            PaletteChoice::NoPalette => None,
            PaletteChoice::Random => self.library.color_palettes.choose(rng).cloned(),
            PaletteChoice::Explicit(id) => {
                let palette = self.library.color_palette(id.as_str()).cloned();
                if palette.is_none() {
                    warn!("unknown color palette '{}'", id);
                }
                palette
            }
        }
    }
}

/// Resolve a selection in one call.
pub fn resolve_style_selection(
    selection: &StyleSelection,
    culture_id: Option<&str>,
    entity_kind: &str,
    cultures: &[Culture],
    library: &StyleLibrary,
) -> ResolvedStyle {
    StyleResolver::new(library, cultures).resolve(selection, culture_id, entity_kind)
}
