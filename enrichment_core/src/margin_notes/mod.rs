//! Margin Notes - splices historian notes into prose at their anchor phrases.
//!
//! Anchoring works as follows:
//! 1. **Partition**: Disabled notes are set aside for a separate summary
//! 2. **Match**: Each enabled note's anchor phrase is found by its first literal occurrence
//! 3. **Order**: Matched anchors are sorted by position, ties keeping list order
//! 4. **Splice**: Text runs and note markers are emitted left to right
//! 5. **Tail**: Notes with no match are appended after the text
//!
//! Positions are UTF-8 byte offsets and the marker goes right after the
//! phrase. Matching is exact on bytes, so it is not aware of graphemes or
//! Unicode normalization: a phrase written in a different normal form than
//! the prose will not match.

mod expansion;
mod note;
mod segment;

pub use expansion::*;
pub use note::*;
pub use segment::*;

use log::debug;

/// Configuration for note anchoring.
#[derive(Debug, Clone)]
pub struct AnchorConfig {
    /// Maximum characters shown in a disabled note's preview.
    pub preview_chars: usize,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { preview_chars: 60 }
    }
}

/// A matched anchor, before ordering.
#[derive(Debug, Clone, Copy)]
struct Anchor<'a> {
    position: usize,
    note: &'a HistorianNote,
    index: usize,
}

/// Splices notes into text.
pub struct NoteAnchorer {
    config: AnchorConfig,
}

impl NoteAnchorer {
    /// Create an anchorer with the given configuration.
    pub fn new(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// Create an anchorer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnchorConfig::default())
    }

    /// Splice the enabled notes into `text`.
    ///
    /// Concatenating the text segments of the result always reproduces `text`.
    pub fn anchor<'a>(&self, text: &'a str, notes: &'a [HistorianNote]) -> AnchoredText<'a> {
        let (enabled, disabled): (Vec<&HistorianNote>, Vec<&HistorianNote>) =
            notes.iter().partition(|note| note.enabled);
        let disabled = DisabledNotes::new(disabled, self.config.preview_chars);

        if enabled.is_empty() {
            return AnchoredText::new(vec![TextSegment::Text(text)], 1, disabled);
        }

        let mut anchors = Vec::with_capacity(enabled.len());
        let mut unmatched = Vec::new();
        for (index, note) in enabled.iter().copied().enumerate() {
            match anchor_position(text, &note.anchor_phrase) {
                Some(position) => anchors.push(Anchor {
                    position,
                    note,
                    index,
                }),
                None => unmatched.push(TextSegment::Note { note, index }),
            }
        }

        // Stable, so notes sharing a position stay in list order.
        anchors.sort_by_key(|anchor| anchor.position);

        let mut segments = Vec::with_capacity(anchors.len() * 2 + 1 + unmatched.len());
        let mut cursor = 0;
        for anchor in &anchors {
            if anchor.position > cursor {
                segments.push(TextSegment::Text(&text[cursor..anchor.position]));
            }
            segments.push(TextSegment::Note {
                note: anchor.note,
                index: anchor.index,
            });
            cursor = anchor.position;
        }
        if cursor < text.len() {
            segments.push(TextSegment::Text(&text[cursor..]));
        }

        let inline_len = segments.len();
        debug!(
            "anchored {} notes, {} unmatched, {} disabled",
            anchors.len(),
            unmatched.len(),
            disabled.count()
        );
        segments.extend(unmatched);

        AnchoredText::new(segments, inline_len, disabled)
    }
}

/// Splice notes into text with the default configuration.
pub fn anchor_notes<'a>(text: &'a str, notes: &'a [HistorianNote]) -> AnchoredText<'a> {
    NoteAnchorer::with_defaults().anchor(text, notes)
}

/// Byte offset just past the first occurrence of `phrase`.
///
/// An empty phrase never matches; it would otherwise pin the note to the
/// start of the text.
fn anchor_position(text: &str, phrase: &str) -> Option<usize> {
    if phrase.is_empty() {
        return None;
    }
    text.find(phrase).map(|start| start + phrase.len())
}
