//! Cursor and selection state for list screens.
//!
//! Every menu in the application shares the same navigation rules: the
//! cursor is clamped to the choice list (no wraparound), and activating a
//! choice replaces the selection set with just the activated index.

use std::collections::HashSet;

/// Cursor plus selection set over a fixed-length choice list.
#[derive(Debug, Clone, Default)]
pub struct SelectCursor {
    cursor: usize,
    selected: HashSet<usize>,
    len: usize,
}

impl SelectCursor {
    /// Create a cursor over a list with `len` choices, starting at index 0
    /// with nothing selected.
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            selected: HashSet::new(),
            len,
        }
    }

    /// Current cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of choices the cursor ranges over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the list has no choices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the given index is currently selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Move the cursor up one row, stopping at the first item.
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down one row, stopping at the last item.
    pub fn move_down(&mut self) {
        if self.len > 0 && self.cursor < self.len - 1 {
            self.cursor += 1;
        }
    }

    /// Commit the current cursor position.
    ///
    /// The selection set is cleared and repopulated with just the cursor
    /// index, then the index is returned. The set never accumulates.
    pub fn activate(&mut self) -> usize {
        self.selected.clear();
        self.selected.insert(self.cursor);
        self.cursor
    }

    /// Select an index directly (used when a deferred request completes for
    /// a choice the cursor may have moved away from).
    pub fn select(&mut self, index: usize) {
        self.selected.clear();
        self.selected.insert(index);
    }
}
