//! Non-fatal consistency checks on a loaded configuration.

use log::warn;
use std::collections::HashSet;

use super::WorldStyleConfig;

/// Which style collection an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCategory {
    Artistic,
    Composition,
    ColorPalette,
}

impl StyleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleCategory::Artistic => "artistic style",
            StyleCategory::Composition => "composition style",
            StyleCategory::ColorPalette => "color palette",
        }
    }
}

/// A problem found in a configuration. None of these stop resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    DuplicateStyleId {
        category: StyleCategory,
        id: String,
    },
    DuplicateCultureId(String),
    /// A culture default names a style that is not in the library.
    DanglingCultureDefault {
        culture_id: String,
        category: StyleCategory,
        style_id: String,
    },
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigIssue::DuplicateStyleId { category, id } => {
                write!(f, "duplicate {} id '{}'", category.as_str(), id)
            }
            ConfigIssue::DuplicateCultureId(id) => write!(f, "duplicate culture id '{}'", id),
            ConfigIssue::DanglingCultureDefault {
                culture_id,
                category,
                style_id,
            } => write!(
                f,
                "culture '{}' defaults to unknown {} '{}'",
                culture_id,
                category.as_str(),
                style_id
            ),
        }
    }
}

impl WorldStyleConfig {
    /// Check the configuration for duplicates and dangling references.
    ///
    /// Every issue is also logged as a warning.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let library = &self.style_library;
        let mut issues = Vec::new();

        duplicates(
            library.artistic_styles.iter().map(|s| s.id.as_str()),
            |id| ConfigIssue::DuplicateStyleId {
                category: StyleCategory::Artistic,
                id,
            },
            &mut issues,
        );
        duplicates(
            library.composition_styles.iter().map(|s| s.id.as_str()),
            |id| ConfigIssue::DuplicateStyleId {
                category: StyleCategory::Composition,
                id,
            },
            &mut issues,
        );
        duplicates(
            library.color_palettes.iter().map(|s| s.id.as_str()),
            |id| ConfigIssue::DuplicateStyleId {
                category: StyleCategory::ColorPalette,
                id,
            },
            &mut issues,
        );
        duplicates(
            self.cultures.iter().map(|c| c.id.as_str()),
            ConfigIssue::DuplicateCultureId,
            &mut issues,
        );

        for culture in &self.cultures {
            if let Some(style_id) = &culture.default_artistic_style_id {
                if library.artistic_style(style_id).is_none() {
                    issues.push(ConfigIssue::DanglingCultureDefault {
                        culture_id: culture.id.clone(),
                        category: StyleCategory::Artistic,
                        style_id: style_id.clone(),
                    });
                }
            }

            for style_id in culture.default_composition_styles.iter().flat_map(|m| m.values()) {
                if library.composition_style(style_id).is_none() {
                    issues.push(ConfigIssue::DanglingCultureDefault {
                        culture_id: culture.id.clone(),
                        category: StyleCategory::Composition,
                        style_id: style_id.clone(),
                    });
                }
            }
        }

        for issue in &issues {
            warn!("style config: {}", issue);
        }
        issues
    }
}

fn duplicates<'a>(
    ids: impl Iterator<Item = &'a str>,
    make_issue: impl Fn(String) -> ConfigIssue,
    issues: &mut Vec<ConfigIssue>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            issues.push(make_issue(id.to_string()));
        }
    }
}
