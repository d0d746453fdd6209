//! Single-line text input with cursor navigation

use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable single-line text. Cursor is a byte offset on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the content, moving the cursor to the end
    pub fn set(&mut self, value: &str) {
        if self.value != value {
            *self = Self::new(value);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Portion of the value to draw in a box `width` columns wide, and the
    /// cursor column within it. Leading text scrolls off once the cursor
    /// would leave the box.
    pub fn view(&self, width: u16) -> (&str, u16) {
        let width = usize::from(width.max(1));
        let mut start = 0;
        while self.value[start..self.cursor].width() >= width {
            start += self.value[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
        let column = self.value[start..self.cursor].width();
        (
            &self.value[start..],
            u16::try_from(column).unwrap_or(u16::MAX),
        )
    }

    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            let next = self.next_boundary();
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map_or(self.value.len(), |(i, _)| self.cursor + i)
    }

    /// Apply an editing key. Returns true if the text changed.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.value.len();
                self.backspace();
                before != self.value.len()
            }
            KeyCode::Delete => {
                let before = self.value.len();
                self.delete();
                before != self.value.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_multibyte() {
        let mut input = TextInput::default();
        for ch in "Zoë".chars() {
            input.insert(ch);
        }
        assert_eq!(input.value(), "Zoë");
        assert_eq!(input.view(20), ("Zoë", 3));

        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "Zoxë");

        input.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert!(input.handle_key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input.value(), "Zox");
    }

    #[test]
    fn test_control_chords_do_not_insert() {
        let mut input = TextInput::new("net");
        assert!(!input.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "net");
        // Shift is just uppercase
        assert!(input.handle_key(KeyCode::Char('X'), KeyModifiers::SHIFT));
        assert_eq!(input.value(), "netX");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::new("ab");
        assert!(!input.handle_key(KeyCode::Delete, KeyModifiers::NONE));
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert!(input.handle_key(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(input.value(), "b");
        assert!(!input.handle_key(KeyCode::Backspace, KeyModifiers::NONE));
    }

    #[test]
    fn test_set_moves_cursor_to_end() {
        let mut input = TextInput::new("abc");
        input.move_left();
        input.set("");
        assert!(input.is_empty());
        assert_eq!(input.view(20), ("", 0));
    }

    #[test]
    fn test_view_scrolls_to_keep_cursor_in_box() {
        let mut input = TextInput::new("abcdefghij");
        assert_eq!(input.view(5), ("ghij", 4));
        assert_eq!(input.view(20), ("abcdefghij", 10));

        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(input.view(5), ("abcdefghij", 0));

        // Wide chars scroll by whole glyphs
        let input = TextInput::new("日本語テキスト");
        let (text, column) = input.view(6);
        assert_eq!(text, "スト");
        assert_eq!(column, 4);
    }
}
