//! Word selection driven by pointer events
//!
//! A selection is always the closed interval between its anchor and its
//! cursor in document order, whatever the drag direction.

use serde::{Deserialize, Serialize};

use crate::models::VerseId;

/// One word of the loaded chapter.
///
/// Ordering is document order: verse id first, then word index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordRef {
    pub verse_id: VerseId,
    pub word_index: u32,
}

impl WordRef {
    pub fn new(verse_id: VerseId, word_index: u32) -> Self {
        Self {
            verse_id,
            word_index,
        }
    }
}

/// An in-progress or finished drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: WordRef,
    pub cursor: Option<WordRef>,
}

impl Selection {
    /// Whether `word` lies inside the selected interval
    pub fn contains(&self, word: WordRef) -> bool {
        let span = end(self);
        span.start <= word && word <= span.end
    }
}

/// A normalized selection: `start <= end` in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub start: WordRef,
    pub end: WordRef,
}

impl WordSpan {
    pub fn is_single_word(&self) -> bool {
        self.start == self.end
    }
}

pub fn begin(word: WordRef) -> Selection {
    Selection {
        anchor: word,
        cursor: None,
    }
}

pub fn extend(selection: &Selection, word: WordRef) -> Selection {
    Selection {
        anchor: selection.anchor,
        cursor: Some(word),
    }
}

/// Close a selection into a span; a missing cursor means a single word
pub fn end(selection: &Selection) -> WordSpan {
    let anchor = selection.anchor;
    let cursor = selection.cursor.unwrap_or(anchor);
    if cursor < anchor {
        WordSpan {
            start: cursor,
            end: anchor,
        }
    } else {
        WordSpan {
            start: anchor,
            end: cursor,
        }
    }
}

/// Selection machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// Pressed on a word, pointer has not moved to another word yet
    Anchoring(Selection),
    /// Pointer moved over at least one other word while pressed
    Dragging(Selection),
    /// Released; the span waits to be committed or cleared
    Committed(Selection),
}

/// Pointer-event state machine over [`Selection`]
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SelectionState::Idle)
    }

    /// The live selection in any non-idle state
    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Anchoring(s)
            | SelectionState::Dragging(s)
            | SelectionState::Committed(s) => Some(s),
        }
    }

    /// The span waiting for commit, only after release
    pub fn pending(&self) -> Option<WordSpan> {
        match &self.state {
            SelectionState::Committed(s) => Some(end(s)),
            _ => None,
        }
    }

    /// Pointer pressed on `word`.
    ///
    /// Pressing a word that is already selected clears the selection.
    pub fn press(&mut self, word: WordRef) {
        if self.selection().is_some_and(|s| s.contains(word)) {
            self.state = SelectionState::Idle;
            return;
        }
        self.state = SelectionState::Anchoring(begin(word));
    }

    /// Pointer entered `word`; ignored unless a press is active
    pub fn enter(&mut self, word: WordRef) {
        match &self.state {
            SelectionState::Anchoring(s) | SelectionState::Dragging(s) => {
                if s.cursor == Some(word) || (s.cursor.is_none() && s.anchor == word) {
                    return;
                }
                self.state = SelectionState::Dragging(extend(s, word));
            }
            SelectionState::Idle | SelectionState::Committed(_) => {}
        }
    }

    /// Pointer released; returns the span now pending commit
    pub fn release(&mut self) -> Option<WordSpan> {
        match self.state {
            SelectionState::Anchoring(s) | SelectionState::Dragging(s) => {
                self.state = SelectionState::Committed(s);
                Some(end(&s))
            }
            SelectionState::Idle | SelectionState::Committed(_) => None,
        }
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(verse_id: VerseId, word_index: u32) -> WordRef {
        WordRef::new(verse_id, word_index)
    }

    #[test]
    fn test_end_without_cursor_is_single_word() {
        let span = end(&begin(w(4, 2)));
        assert_eq!(span.start, w(4, 2));
        assert_eq!(span.end, w(4, 2));
        assert!(span.is_single_word());
    }

    #[test]
    fn test_backward_drag_is_normalized() {
        let selection = extend(&begin(w(5, 1)), w(4, 7));
        let span = end(&selection);
        assert_eq!(span.start, w(4, 7));
        assert_eq!(span.end, w(5, 1));
    }

    #[test]
    fn test_document_order() {
        assert!(w(1, 9) < w(2, 0));
        assert!(w(2, 0) < w(2, 1));
    }

    #[test]
    fn test_press_drag_release() {
        let mut machine = SelectionMachine::new();
        machine.press(w(1, 3));
        assert!(matches!(machine.state(), SelectionState::Anchoring(_)));

        machine.enter(w(1, 3));
        assert!(matches!(machine.state(), SelectionState::Anchoring(_)));

        machine.enter(w(2, 0));
        machine.enter(w(1, 1));
        assert!(matches!(machine.state(), SelectionState::Dragging(_)));

        let span = machine.release().unwrap();
        assert_eq!(span.start, w(1, 1));
        assert_eq!(span.end, w(1, 3));
        assert_eq!(machine.pending(), Some(span));
    }

    #[test]
    fn test_move_before_press_is_ignored() {
        let mut machine = SelectionMachine::new();
        machine.enter(w(1, 0));
        assert!(machine.is_idle());
        assert_eq!(machine.release(), None);
    }

    #[test]
    fn test_pressing_selected_word_twice_clears() {
        let mut machine = SelectionMachine::new();
        machine.press(w(1, 0));
        machine.release();
        machine.press(w(1, 0));
        assert!(machine.is_idle());
        assert_eq!(machine.pending(), None);
    }

    #[test]
    fn test_press_inside_committed_range_clears() {
        let mut machine = SelectionMachine::new();
        machine.press(w(1, 0));
        machine.enter(w(1, 5));
        machine.release();
        machine.press(w(1, 2));
        assert!(machine.is_idle());
    }

    #[test]
    fn test_press_outside_selection_starts_new() {
        let mut machine = SelectionMachine::new();
        machine.press(w(1, 0));
        machine.release();
        machine.press(w(3, 4));
        assert_eq!(machine.selection().unwrap().anchor, w(3, 4));
        assert_eq!(machine.pending(), None);
    }

    #[test]
    fn test_moves_after_release_are_ignored() {
        let mut machine = SelectionMachine::new();
        machine.press(w(1, 0));
        let span = machine.release();
        machine.enter(w(9, 9));
        assert_eq!(machine.pending(), span);
    }
}
