//! The style library: artistic styles, composition styles and color palettes
//! selectable for image-generation prompts.

use serde::{Deserialize, Serialize};

/// A selectable artistic style or color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Text spliced into the image prompt when this record is chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_fragment: Option<String>,
}

impl StyleRecord {
    /// Create a record with no description or prompt fragment.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            prompt_fragment: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the prompt fragment.
    pub fn with_prompt_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.prompt_fragment = Some(fragment.into());
        self
    }
}

/// A composition style, optionally restricted to certain entity kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionStyle {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_fragment: Option<String>,
    /// Entity kinds this composition suits. Absent or empty means any kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitable_for_kinds: Option<Vec<String>>,
}

impl CompositionStyle {
    /// Create a composition style usable for any kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            prompt_fragment: None,
            suitable_for_kinds: None,
        }
    }

    /// Set the prompt fragment.
    pub fn with_prompt_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.prompt_fragment = Some(fragment.into());
        self
    }

    /// Restrict this composition to the given kind (accumulates).
    pub fn for_kind(mut self, kind: impl Into<String>) -> Self {
        self.suitable_for_kinds
            .get_or_insert_with(Vec::new)
            .push(kind.into());
        self
    }

    /// Check whether this composition may be used for an entity of `kind`.
    pub fn is_suitable_for(&self, kind: &str) -> bool {
        match &self.suitable_for_kinds {
            Some(kinds) if !kinds.is_empty() => kinds.iter().any(|k| k == kind),
            _ => true,
        }
    }
}

/// The catalog of selectable styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleLibrary {
    #[serde(default)]
    pub artistic_styles: Vec<StyleRecord>,
    #[serde(default)]
    pub composition_styles: Vec<CompositionStyle>,
    #[serde(default)]
    pub color_palettes: Vec<StyleRecord>,
}

impl StyleLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an artistic style by id.
    pub fn artistic_style(&self, id: &str) -> Option<&StyleRecord> {
        self.artistic_styles.iter().find(|s| s.id == id)
    }

    /// Get a composition style by id, ignoring kind restrictions.
    pub fn composition_style(&self, id: &str) -> Option<&CompositionStyle> {
        self.composition_styles.iter().find(|s| s.id == id)
    }

    /// Get a color palette by id.
    pub fn color_palette(&self, id: &str) -> Option<&StyleRecord> {
        self.color_palettes.iter().find(|s| s.id == id)
    }

    /// Composition styles usable for an entity of `kind`, in library order.
    pub fn compositions_for_kind(&self, kind: &str) -> Vec<&CompositionStyle> {
        self.composition_styles
            .iter()
            .filter(|s| s.is_suitable_for(kind))
            .collect()
    }

    /// Check whether the library has nothing to choose from.
    pub fn is_empty(&self) -> bool {
        self.artistic_styles.is_empty()
            && self.composition_styles.is_empty()
            && self.color_palettes.is_empty()
    }

    /// Return a library with `style` inserted, replacing any record with the same id.
    pub fn with_artistic_style(mut self, style: StyleRecord) -> Self {
        upsert(&mut self.artistic_styles, style, |s| &s.id);
        self
    }

    /// Return a library with `style` inserted, replacing any record with the same id.
    pub fn with_composition_style(mut self, style: CompositionStyle) -> Self {
        upsert(&mut self.composition_styles, style, |s| &s.id);
        self
    }

    /// Return a library with `palette` inserted, replacing any record with the same id.
    pub fn with_color_palette(mut self, palette: StyleRecord) -> Self {
        upsert(&mut self.color_palettes, palette, |s| &s.id);
        self
    }

    /// Return a library without the artistic style `id`.
    pub fn without_artistic_style(mut self, id: &str) -> Self {
        self.artistic_styles.retain(|s| s.id != id);
        self
    }

    /// Return a library without the composition style `id`.
    pub fn without_composition_style(mut self, id: &str) -> Self {
        self.composition_styles.retain(|s| s.id != id);
        self
    }

    /// Return a library without the color palette `id`.
    pub fn without_color_palette(mut self, id: &str) -> Self {
        self.color_palettes.retain(|s| s.id != id);
        self
    }
}

/// Replace the element with the same key in place, or append.
fn upsert<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> &String) {
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(pos) => items[pos] = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> StyleLibrary {
        StyleLibrary::new()
            .with_artistic_style(StyleRecord::new("oil", "Oil Painting"))
            .with_artistic_style(StyleRecord::new("ink", "Ink Wash"))
            .with_composition_style(
                CompositionStyle::new("portrait", "Portrait").for_kind("character"),
            )
            .with_composition_style(CompositionStyle::new("vista", "Vista").for_kind("location"))
            .with_composition_style(CompositionStyle::new("centered", "Centered"))
            .with_color_palette(StyleRecord::new("dusk", "Dusk"))
    }

    #[test]
    fn test_lookup_by_id() {
        let library = sample_library();
        assert_eq!(library.artistic_style("ink").unwrap().name, "Ink Wash");
        assert!(library.artistic_style("watercolor").is_none());
        assert!(library.composition_style("vista").is_some());
        assert!(library.color_palette("dusk").is_some());
    }

    #[test]
    fn test_kind_filtering() {
        let library = sample_library();

        let ids: Vec<_> = library
            .compositions_for_kind("character")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["portrait", "centered"]);

        let ids: Vec<_> = library
            .compositions_for_kind("artifact")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["centered"]);
    }

    #[test]
    fn test_empty_kind_list_suits_everything() {
        let mut style = CompositionStyle::new("any", "Any");
        style.suitable_for_kinds = Some(Vec::new());
        assert!(style.is_suitable_for("character"));
        assert!(style.is_suitable_for("location"));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let library = sample_library().with_artistic_style(
            StyleRecord::new("oil", "Oil on Canvas").with_prompt_fragment("thick impasto"),
        );

        assert_eq!(library.artistic_styles.len(), 2);
        assert_eq!(library.artistic_styles[0].name, "Oil on Canvas");
        assert_eq!(
            library.artistic_styles[0].prompt_fragment.as_deref(),
            Some("thick impasto")
        );
    }

    #[test]
    fn test_updates_leave_original_untouched() {
        let original = sample_library();
        let trimmed = original
            .clone()
            .without_artistic_style("oil")
            .without_color_palette("dusk");

        assert_eq!(original.artistic_styles.len(), 2);
        assert_eq!(trimmed.artistic_styles.len(), 1);
        assert!(trimmed.color_palettes.is_empty());
        assert!(!trimmed.is_empty());
        assert!(StyleLibrary::new().is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let library = StyleLibrary::new().with_composition_style(
            CompositionStyle::new("portrait", "Portrait")
                .with_prompt_fragment("head and shoulders")
                .for_kind("character"),
        );
        let json = serde_json::to_string(&library).unwrap();

        assert!(json.contains("\"artisticStyles\":[]"));
        assert!(json.contains("\"colorPalettes\":[]"));
        assert!(json.contains("\"promptFragment\":\"head and shoulders\""));
        assert!(json.contains("\"suitableForKinds\":[\"character\"]"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let library: StyleLibrary =
            serde_json::from_str(r#"{"artisticStyles":[{"id":"oil","name":"Oil"}]}"#).unwrap();
        assert_eq!(library.artistic_styles.len(), 1);
        assert!(library.composition_styles.is_empty());
        assert!(library.color_palettes.is_empty());
    }
}
