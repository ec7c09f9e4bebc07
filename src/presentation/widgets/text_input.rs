//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Text input field widget.
///
/// The cursor is a byte offset into the value and always sits on a char
/// boundary, so multibyte input (accented Spanish text) edits correctly.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if let Some(idx) = self.prev_boundary() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        if let Some(idx) = self.prev_boundary() {
            self.cursor = idx;
        }
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if let Some(idx) = self.next_boundary() {
            self.cursor = idx;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let paragraph = Paragraph::new(self.display_text()).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            let cursor_col = self.value[..self.cursor].width();
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + cursor_col as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Email");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::new("Email");
        input.input_char('a');
        input.input_char('c');
        input.move_left();
        input.input_char('b');

        assert_eq!(input.value(), "abc");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_multibyte_input() {
        let mut input = TextInput::new("Buscar");
        input.input_char('n');
        input.input_char('i');
        input.input_char('ñ');
        input.input_char('a');
        assert_eq!(input.value(), "niña");

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "ni");
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = TextInput::new("Email");
        input.input_char('á');
        input.input_char('b');
        input.move_left();
        input.move_left();
        input.input_char('x');
        assert_eq!(input.value(), "xáb");

        input.move_right();
        input.delete();
        assert_eq!(input.value(), "xá");
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let input = TextInput::new("Buscar").placeholder("Buscar enfermeros...");
        assert_eq!(input.display_text(), "Buscar enfermeros...");
    }
}
