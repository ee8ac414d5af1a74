//! Expanded/collapsed state of note markers in the reading view.

use std::collections::HashSet;

use super::HistorianNote;

/// Which notes the reader has expanded, keyed by note id.
///
/// Independent of anchoring; re-anchoring text never resets it.
#[derive(Debug, Clone, Default)]
pub struct NoteExpansion {
    expanded: HashSet<String>,
}

impl NoteExpansion {
    /// Create a state with every note collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a note is expanded.
    pub fn is_expanded(&self, note_id: &str) -> bool {
        self.expanded.contains(note_id)
    }

    /// Flip a note's state and return the new one.
    pub fn toggle(&mut self, note_id: &str) -> bool {
        if self.expanded.remove(note_id) {
            false
        } else {
            self.expanded.insert(note_id.to_string());
            true
        }
    }

    pub fn expand(&mut self, note_id: &str) {
        self.expanded.insert(note_id.to_string());
    }

    pub fn collapse(&mut self, note_id: &str) {
        self.expanded.remove(note_id);
    }

    /// Collapse every note.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Forget notes that no longer exist.
    pub fn retain_notes(&mut self, notes: &[HistorianNote]) {
        let live: HashSet<&str> = notes.iter().map(|n| n.note_id.as_str()).collect();
        self.expanded.retain(|id| live.contains(id.as_str()));
    }
}
