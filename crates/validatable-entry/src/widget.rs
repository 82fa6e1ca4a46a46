//! Terminal rendering and key input for entries.
//!
//! [`EntryView`] draws the three display slots of a label-backed entry on
//! consecutive rows:
//!
//! ```text
//! Username          <- floating placeholder, shown once text is typed
//! al_               <- the input, or its dimmed placeholder while empty
//! Must be longer…   <- validation message, shown while invalid
//! ```

use crate::entry::{DisplayText, Label, ValidatableEntry};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

const MASK_CHAR: char = '\u{2022}';

/// Rows an entry needs without a block.
pub const ENTRY_HEIGHT: u16 = 3;

/// Renders a [`ValidatableEntry`] backed by [`Label`] slots.
pub struct EntryView<'a> {
    entry: &'a ValidatableEntry<Label>,
    focused: bool,
    block: Option<Block<'a>>,
}

impl<'a> EntryView<'a> {
    /// Create a view of an entry.
    pub fn new(entry: &'a ValidatableEntry<Label>) -> Self {
        Self {
            entry,
            focused: false,
            block: None,
        }
    }

    /// Draw the focus highlight and cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the block wrapper.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn input_text(&self) -> String {
        let text = &self.entry.entry_slot().text;
        if self.entry.is_masked() {
            MASK_CHAR.to_string().repeat(text.chars().count())
        } else {
            text.clone()
        }
    }
}

impl Widget for EntryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;
        let bottom = inner.y + inner.height;

        // Floating placeholder
        let floating = self.entry.floating_slot();
        if floating.visible {
            buf.set_stringn(
                inner.x,
                inner.y,
                &floating.text,
                width,
                Style::default().fg(floating.color),
            );
        }

        // Input
        let input_y = inner.y + 1;
        if input_y >= bottom {
            return;
        }
        let input_style = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        buf.set_style(Rect::new(inner.x, input_y, inner.width, 1), input_style);

        let slot = self.entry.entry_slot();
        let display_width = if slot.text.is_empty() {
            let hint_style = input_style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
            buf.set_stringn(inner.x, input_y, &slot.hint, width, hint_style);
            0
        } else {
            let text = self.input_text();
            // Keep the end of long input visible, leaving a column for the cursor
            let room = if self.focused { width.saturating_sub(1) } else { width };
            let skip = text.width().saturating_sub(room);
            let visible: String = text
                .chars()
                .scan(0usize, |seen, c| {
                    *seen += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                    Some((*seen, c))
                })
                .filter(|(seen, _)| *seen > skip)
                .map(|(_, c)| c)
                .collect();
            buf.set_stringn(inner.x, input_y, &visible, width, input_style);
            visible.width()
        };

        if self.focused {
            let cursor_x = inner.x + display_width as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, input_y)].set_char('_');
            }
        }

        // Validation message
        let message_y = inner.y + 2;
        let message = self.entry.message_slot();
        if message_y < bottom && message.visible {
            buf.set_stringn(
                inner.x,
                message_y,
                &message.text,
                width,
                Style::default().fg(message.color),
            );
        }
    }
}

impl<S: DisplayText> ValidatableEntry<S> {
    /// Translate a key press into a text edit.
    ///
    /// Printable characters append and Backspace removes the last character,
    /// both through the text-changed hook. Returns false for keys the host
    /// should handle, such as focus movement.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut text = self.text().to_string();
                text.push(c);
                self.on_text_changed(text);
                true
            }
            KeyCode::Backspace => {
                let mut text = self.text().to_string();
                if text.pop().is_some() {
                    self.on_text_changed(text);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{MinLength, ValidationRule};
    use crate::CharSet;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn render(view: EntryView<'_>, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, ENTRY_HEIGHT);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_render_empty_shows_hint() {
        let entry = ValidatableEntry::new().with_placeholder("Username");
        let buf = render(EntryView::new(&entry), 20);

        assert_eq!(row(&buf, 0), "");
        assert_eq!(row(&buf, 1), "Username");
        assert_eq!(buf[(0, 1)].fg, Color::DarkGray);
        assert_eq!(row(&buf, 2), "");
    }

    #[test]
    fn test_render_invalid() {
        let mut entry = ValidatableEntry::new()
            .with_placeholder("Username")
            .with_rule(MinLength::new(3).with_message("Too short").into_shared());
        entry.set_text("al");
        entry.on_focus_lost();

        let buf = render(EntryView::new(&entry), 20);

        assert_eq!(row(&buf, 0), "Username");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
        assert_eq!(row(&buf, 1), "al");
        assert_eq!(row(&buf, 2), "Too short");
        assert_eq!(buf[(0, 2)].fg, Color::Red);
    }

    #[test]
    fn test_render_masked_with_cursor() {
        let mut entry = ValidatableEntry::new().with_masked(true);
        entry.set_text("pass");

        let buf = render(EntryView::new(&entry).focused(true), 10);

        assert_eq!(row(&buf, 1), "\u{2022}\u{2022}\u{2022}\u{2022}_");
        assert_eq!(buf[(0, 1)].bg, Color::DarkGray);
    }

    #[test]
    fn test_render_long_text_keeps_tail() {
        let mut entry = ValidatableEntry::new();
        entry.set_text("abcdefghij");

        let buf = render(EntryView::new(&entry).focused(true), 5);

        assert_eq!(row(&buf, 1), "ghij_");
    }

    #[test]
    fn test_render_long_text_unfocused_uses_full_width() {
        let mut entry = ValidatableEntry::new();
        entry.set_text("abcdefghij");

        let buf = render(EntryView::new(&entry), 5);

        assert_eq!(row(&buf, 1), "fghij");
    }

    #[test]
    fn test_render_tiny_area() {
        let mut entry = ValidatableEntry::new();
        entry.set_text("abc");
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        EntryView::new(&entry).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "");
    }

    #[test]
    fn test_handle_key_edits() {
        let mut entry = ValidatableEntry::new();

        assert!(entry.handle_key(key(KeyCode::Char('h'))));
        assert!(entry.handle_key(key(KeyCode::Char('i'))));
        assert_eq!(entry.text(), "hi");

        assert!(entry.handle_key(key(KeyCode::Backspace)));
        assert_eq!(entry.text(), "h");

        entry.handle_key(key(KeyCode::Backspace));
        assert!(entry.handle_key(key(KeyCode::Backspace)));
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_handle_key_leaves_focus_keys_to_host() {
        let mut entry = ValidatableEntry::new();

        assert!(!entry.handle_key(key(KeyCode::Tab)));
        assert!(!entry.handle_key(key(KeyCode::Enter)));
        assert!(!entry.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_handle_key_respects_allowed_characters() {
        let mut entry = ValidatableEntry::new().with_allowed_characters(CharSet::digits());

        entry.handle_key(key(KeyCode::Char('4')));
        entry.handle_key(key(KeyCode::Char('x')));
        entry.handle_key(key(KeyCode::Char('2')));

        assert_eq!(entry.text(), "42");
    }
}
