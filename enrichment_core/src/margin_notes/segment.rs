//! Anchoring output: the spliced segment sequence and the disabled-note summary.

use super::HistorianNote;

/// A piece of the spliced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSegment<'a> {
    /// A run of the source text.
    Text(&'a str),
    /// A note marker. `index` is the note's position among enabled notes.
    Note { note: &'a HistorianNote, index: usize },
}

impl<'a> TextSegment<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            TextSegment::Text(text) => Some(*text),
            TextSegment::Note { .. } => None,
        }
    }

    pub fn as_note(&self) -> Option<(&'a HistorianNote, usize)> {
        match self {
            TextSegment::Text(_) => None,
            TextSegment::Note { note, index } => Some((*note, *index)),
        }
    }
}

/// Source text with enabled notes spliced in at their anchors.
///
/// The segments are the inline part (text interleaved with matched note
/// markers, left to right) followed by the unmatched notes in list order.
/// They are read-only so the inline/unmatched split stays valid.
#[derive(Debug, Clone)]
pub struct AnchoredText<'a> {
    segments: Vec<TextSegment<'a>>,
    inline_len: usize,
    pub disabled: DisabledNotes<'a>,
}

impl<'a> AnchoredText<'a> {
    pub(crate) fn new(
        segments: Vec<TextSegment<'a>>,
        inline_len: usize,
        disabled: DisabledNotes<'a>,
    ) -> Self {
        Self {
            segments,
            inline_len,
            disabled,
        }
    }

    /// All segments: the inline part, then the unmatched notes.
    pub fn segments(&self) -> &[TextSegment<'a>] {
        &self.segments
    }

    /// Text and matched markers, in reading order.
    pub fn inline_segments(&self) -> &[TextSegment<'a>] {
        &self.segments[..self.inline_len]
    }

    /// Notes placed inline, with their enabled-list index.
    pub fn inline_notes(&self) -> impl Iterator<Item = (&'a HistorianNote, usize)> + '_ {
        self.inline_segments().iter().filter_map(TextSegment::as_note)
    }

    /// Notes whose anchor phrase was not found, in their original order.
    pub fn unmatched_notes(&self) -> impl Iterator<Item = (&'a HistorianNote, usize)> + '_ {
        self.segments[self.inline_len..]
            .iter()
            .filter_map(TextSegment::as_note)
    }

    /// Concatenated text segments; always equals the source text.
    pub fn plain_text(&self) -> String {
        self.segments.iter().filter_map(TextSegment::as_text).collect()
    }

    /// Render the text with `[n]` markers after each anchor, then a numbered
    /// list of every enabled note.
    pub fn to_marked_text(&self) -> String {
        let mut out = String::new();
        let mut notes = Vec::new();

        for segment in &self.segments[..self.inline_len] {
            match segment {
                TextSegment::Text(text) => out.push_str(text),
                TextSegment::Note { note, index } => {
                    out.push_str(&format!("[{}]", index + 1));
                    notes.push((*index, *note));
                }
            }
        }
        notes.extend(self.unmatched_notes().map(|(note, index)| (index, note)));

        if notes.is_empty() {
            return out;
        }

        notes.sort_by_key(|(index, _)| *index);
        out.push_str("\n\n");
        for (index, note) in notes {
            out.push_str(&format!(
                "[{}] {}: {}\n",
                index + 1,
                note.note_type.label(),
                note.text
            ));
        }
        out
    }
}

/// Notes switched off by the user, reported apart from the splice.
#[derive(Debug, Clone)]
pub struct DisabledNotes<'a> {
    notes: Vec<&'a HistorianNote>,
    preview_chars: usize,
}

impl<'a> DisabledNotes<'a> {
    pub(crate) fn new(notes: Vec<&'a HistorianNote>, preview_chars: usize) -> Self {
        Self {
            notes,
            preview_chars,
        }
    }

    /// Number of disabled notes.
    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Disabled notes in their original relative order.
    pub fn notes(&self) -> &[&'a HistorianNote] {
        &self.notes
    }

    /// Truncated note texts for the collapsed summary.
    pub fn previews(&self) -> Vec<String> {
        self.notes
            .iter()
            .map(|note| truncate_preview(&note.text, self.preview_chars))
            .collect()
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::margin_notes::{anchor_notes, NoteType};

    #[test]
    fn test_segments_split_into_inline_and_unmatched() {
        let text = "The dragon flew over the castle.";
        let notes = vec![
            HistorianNote::new(NoteType::Tangent, "griffin", "lost").with_id("lost"),
            HistorianNote::new(NoteType::Commentary, "dragon", "found").with_id("found"),
        ];

        let anchored = anchor_notes(text, &notes);
        let inline = anchored.inline_segments().len();
        let all = anchored.segments();

        assert_eq!(all.len(), inline + 1);
        assert_eq!(&all[..inline], anchored.inline_segments());
        assert_eq!(all[inline].as_note().unwrap().0.note_id, "lost");

        // A caller keeps only the text; the anchored result is unaffected.
        let mut copy = all.to_vec();
        copy.retain(|s| s.as_text().is_some());
        assert_eq!(copy.len(), 2);
        assert_eq!(anchored.inline_segments().len(), 3);
        assert_eq!(anchored.unmatched_notes().count(), 1);
        assert!(anchored.to_marked_text().starts_with("The dragon[2]"));
    }

    #[test]
    fn test_truncate_preview() {
        assert_eq!(truncate_preview("short", 10), "short");
        assert_eq!(truncate_preview("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_preview("the long and winding", 8), "the long…");
        assert_eq!(truncate_preview("the long and winding", 9), "the long…");
    }

    #[test]
    fn test_truncate_preview_multibyte() {
        assert_eq!(truncate_preview("Ærøskøbing harbour", 10), "Ærøskøbing…");
    }
}
