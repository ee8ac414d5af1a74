//! Historian margin notes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The voice a margin note is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    Commentary,
    Correction,
    Tangent,
    Skepticism,
    Pedantic,
    Temporal,
}

impl NoteType {
    pub fn all() -> &'static [NoteType] {
        &[
            NoteType::Commentary,
            NoteType::Correction,
            NoteType::Tangent,
            NoteType::Skepticism,
            NoteType::Pedantic,
            NoteType::Temporal,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Commentary => "commentary",
            NoteType::Correction => "correction",
            NoteType::Tangent => "tangent",
            NoteType::Skepticism => "skepticism",
            NoteType::Pedantic => "pedantic",
            NoteType::Temporal => "temporal",
        }
    }

    /// Label shown next to the note marker.
    pub fn label(&self) -> &'static str {
        match self {
            NoteType::Commentary => "Commentary",
            NoteType::Correction => "Correction",
            NoteType::Tangent => "Tangent",
            NoteType::Skepticism => "Skeptical",
            NoteType::Pedantic => "Pedantic",
            NoteType::Temporal => "Temporal",
        }
    }
}

/// A margin annotation attached to a phrase of generated prose.
///
/// Notes come from a generation step. Afterwards only `enabled` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorianNote {
    pub note_id: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub text: String,
    /// Literal phrase in the prose the note follows.
    pub anchor_phrase: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl HistorianNote {
    /// Create an enabled note with a fresh id.
    pub fn new(
        note_type: NoteType,
        anchor_phrase: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            note_id: Uuid::new_v4().to_string(),
            note_type,
            text: text.into(),
            anchor_phrase: anchor_phrase.into(),
            enabled: true,
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, note_id: impl Into<String>) -> Self {
        self.note_id = note_id.into();
        self
    }

    /// Mark the note disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Switch the note on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_is_enabled() {
        let note = HistorianNote::new(NoteType::Tangent, "dragon", "Dragons were rarer then.");
        assert!(note.enabled);
        assert!(!note.note_id.is_empty());
    }

    #[test]
    fn test_toggle_enabled() {
        let mut note = HistorianNote::new(NoteType::Correction, "castle", "It was a fort.");
        note.set_enabled(false);
        assert!(!note.enabled);
        note.set_enabled(true);
        assert!(note.enabled);
    }

    #[test]
    fn test_note_json_shape() {
        let note = HistorianNote::new(NoteType::Skepticism, "three days", "Doubtful.")
            .with_id("n1")
            .disabled();
        let json = serde_json::to_string(&note).unwrap();

        assert_eq!(
            json,
            r#"{"noteId":"n1","type":"skepticism","text":"Doubtful.","anchorPhrase":"three days","enabled":false}"#
        );
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let note: HistorianNote = serde_json::from_str(
            r#"{"noteId":"n2","type":"temporal","text":"Later.","anchorPhrase":"then"}"#,
        )
        .unwrap();
        assert!(note.enabled);
        assert_eq!(note.note_type, NoteType::Temporal);
    }

    #[test]
    fn test_type_names() {
        for note_type in NoteType::all() {
            let json = serde_json::to_string(note_type).unwrap();
            assert_eq!(json, format!("\"{}\"", note_type.as_str()));
        }
    }
}
