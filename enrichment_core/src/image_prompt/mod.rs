//! Image Prompt - renders a resolved style as a section of an image prompt.

use serde::{Deserialize, Serialize};

use crate::style_resolver::ResolvedStyle;

/// Prompt text for each resolved style part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePrompt {
    pub artistic: Option<String>,
    pub composition: Option<String>,
    pub color_palette: Option<String>,
    pub culture_keywords: Vec<String>,
}

impl StylePrompt {
    /// Collect prompt text from a resolved style.
    ///
    /// A record's `prompt_fragment` is used when present, its name otherwise.
    pub fn from_resolved(resolved: &ResolvedStyle) -> Self {
        Self {
            artistic: resolved
                .artistic_style
                .as_ref()
                .map(|s| fragment_or_name(&s.prompt_fragment, &s.name)),
            composition: resolved
                .composition_style
                .as_ref()
                .map(|s| fragment_or_name(&s.prompt_fragment, &s.name)),
            color_palette: resolved
                .color_palette
                .as_ref()
                .map(|s| fragment_or_name(&s.prompt_fragment, &s.name)),
            culture_keywords: resolved.culture_keywords.clone(),
        }
    }

    /// Check whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.artistic.is_none()
            && self.composition.is_none()
            && self.color_palette.is_none()
            && self.culture_keywords.is_empty()
    }

    /// Format as a prompt section. Empty when nothing was resolved.
    pub fn to_prompt_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut prompt = String::new();
        prompt.push_str("## Visual Style\n");

        if let Some(artistic) = &self.artistic {
            prompt.push_str(&format!("Style: {}\n", artistic));
        }
        if let Some(composition) = &self.composition {
            prompt.push_str(&format!("Composition: {}\n", composition));
        }
        if let Some(palette) = &self.color_palette {
            prompt.push_str(&format!("Color palette: {}\n", palette));
        }
        if !self.culture_keywords.is_empty() {
            prompt.push_str(&format!(
                "Cultural elements: {}\n",
                self.culture_keywords.join(", ")
            ));
        }

        prompt
    }
}

fn fragment_or_name(fragment: &Option<String>, name: &str) -> String {
    match fragment.as_deref() {
        Some(fragment) if !fragment.trim().is_empty() => fragment.to_string(),
        _ => name.to_string(),
    }
}

/// Append the style section to a subject description.
pub fn compose_image_prompt(subject: &str, resolved: &ResolvedStyle) -> String {
    let style = StylePrompt::from_resolved(resolved).to_prompt_string();
    if style.is_empty() {
        return subject.to_string();
    }
    format!("{}\n\n{}", subject.trim_end(), style)
}
