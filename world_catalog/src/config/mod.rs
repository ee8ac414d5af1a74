//! The persisted style/culture configuration.
//!
//! The JSON form uses the same camelCase field names as the existing
//! persisted configuration, so files written by other tools load unchanged.
//! TOML is accepted for hand-written configs.

mod validate;

pub use validate::*;

use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cultures::{find_culture, Culture};
use crate::styles::StyleLibrary;

/// Errors raised while loading or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Style library plus cultures, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldStyleConfig {
    #[serde(default)]
    pub style_library: StyleLibrary,
    #[serde(default)]
    pub cultures: Vec<Culture>,
}

impl WorldStyleConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&source)?;

        info!(
            "loaded style config from {}: {} artistic, {} composition, {} palettes, {} cultures",
            path.display(),
            config.style_library.artistic_styles.len(),
            config.style_library.composition_styles.len(),
            config.style_library.color_palettes.len(),
            config.cultures.len()
        );
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a culture by id.
    pub fn culture(&self, id: &str) -> Option<&Culture> {
        find_culture(&self.cultures, Some(id))
    }

    /// Return a config with `culture` inserted, replacing any culture with the same id.
    pub fn with_culture(mut self, culture: Culture) -> Self {
        match self.cultures.iter().position(|c| c.id == culture.id) {
            Some(pos) => self.cultures[pos] = culture,
            None => self.cultures.push(culture),
        }
        self
    }

    /// Return a config with the style library replaced.
    pub fn with_style_library(mut self, library: StyleLibrary) -> Self {
        self.style_library = library;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::StyleRecord;

    const SAMPLE_JSON: &str = r#"{
        "styleLibrary": {
            "artisticStyles": [
                {"id": "oil", "name": "Oil Painting", "promptFragment": "oil on canvas"}
            ],
            "compositionStyles": [
                {"id": "portrait", "name": "Portrait", "suitableForKinds": ["character"]}
            ],
            "colorPalettes": []
        },
        "cultures": [
            {
                "id": "aurora",
                "name": "Aurora Stack",
                "styleKeywords": ["glacial blue"],
                "defaultArtisticStyleId": "oil",
                "defaultCompositionStyles": {"character": "portrait"}
            }
        ]
    }"#;

    const SAMPLE_TOML: &str = r#"
[styleLibrary]
artisticStyles = [{ id = "oil", name = "Oil Painting" }]

[[styleLibrary.compositionStyles]]
id = "portrait"
name = "Portrait"
suitableForKinds = ["character"]

[[cultures]]
id = "aurora"
name = "Aurora Stack"
styleKeywords = ["glacial blue"]
defaultArtisticStyleId = "oil"

[cultures.defaultCompositionStyles]
character = "portrait"
"#;

    #[test]
    fn test_parse_json() {
        let config = WorldStyleConfig::from_json_str(SAMPLE_JSON).unwrap();
        assert_eq!(config.style_library.artistic_styles.len(), 1);
        assert_eq!(
            config.style_library.artistic_styles[0].prompt_fragment.as_deref(),
            Some("oil on canvas")
        );
        let aurora = config.culture("aurora").unwrap();
        assert_eq!(aurora.default_composition_for("character"), Some("portrait"));
    }

    #[test]
    fn test_parse_toml_matches_json() {
        let from_toml = WorldStyleConfig::from_toml_str(SAMPLE_TOML).unwrap();
        let from_json = WorldStyleConfig::from_json_str(SAMPLE_JSON).unwrap();

        assert_eq!(from_toml.cultures, from_json.cultures);
        assert_eq!(
            from_toml.style_library.composition_styles,
            from_json.style_library.composition_styles
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = WorldStyleConfig::from_json_str(SAMPLE_JSON).unwrap();
        let json = config.to_json_string().unwrap();
        let reloaded = WorldStyleConfig::from_json_str(&json).unwrap();
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = WorldStyleConfig::from_json_str("{\"cultures\": 5}").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = WorldStyleConfig::load("styles.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("world_catalog_missing_config_8c1f.json");
        let err = WorldStyleConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "world_catalog_config_{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, SAMPLE_TOML).unwrap();

        let config = WorldStyleConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.cultures.len(), 1);
    }

    #[test]
    fn test_with_culture_upserts() {
        let config = WorldStyleConfig::from_json_str(SAMPLE_JSON)
            .unwrap()
            .with_culture(Culture::new("aurora", "Aurora Reborn"))
            .with_culture(Culture::new("nightshelf", "Nightshelf"));

        assert_eq!(config.cultures.len(), 2);
        assert_eq!(config.culture("aurora").unwrap().name, "Aurora Reborn");
    }

    #[test]
    fn test_with_style_library() {
        let library = StyleLibrary::new().with_color_palette(StyleRecord::new("dusk", "Dusk"));
        let config = WorldStyleConfig::new().with_style_library(library);
        assert!(config.style_library.color_palette("dusk").is_some());
    }
}
