//! Single-line text editor.
//!
//! The editing primitive behind every form slot: a string plus a cursor,
//! with insert, delete and cursor movement. Cursor positions are character
//! indices, not byte offsets, so multi-byte input behaves.

use crate::state::KeyboardEvent;

/// One editable line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEdit {
    text: String,
    /// Cursor position in characters, 0..=char_count.
    cursor: usize,
}

impl LineEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content, placing the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle an editing key. Returns true if the event was consumed.
    ///
    /// Enter and Escape are not handled here; they belong to the form.
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        if let Some(ch) = event.printable() {
            self.insert(ch);
            return true;
        }
        match event.key.as_str() {
            "Backspace" => self.backspace(),
            "Delete" => self.delete(),
            "ArrowLeft" => self.move_left(),
            "ArrowRight" => self.move_right(),
            "Home" => self.move_home(),
            "End" => self.move_end(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
