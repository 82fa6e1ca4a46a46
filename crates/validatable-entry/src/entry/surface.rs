//! Display slots an entry writes its presentation into.

use ratatui::style::Color;

/// A piece of text the host UI displays.
///
/// An entry owns three of these: the input itself, the floating placeholder
/// above it and the validation message below it.
pub trait DisplayText {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Show or hide the slot.
    fn set_visible(&mut self, visible: bool);

    /// Foreground color.
    fn set_color(&mut self, color: Color);

    /// Inline hint shown while the text is empty. Only meaningful for inputs.
    fn set_hint(&mut self, _hint: &str) {}
}

/// In-memory display slot, rendered by [`EntryView`](crate::EntryView).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Displayed text
    pub text: String,
    /// Inline hint
    pub hint: String,
    /// Whether the slot is shown
    pub visible: bool,
    /// Foreground color
    pub color: Color,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            hint: String::new(),
            visible: true,
            color: Color::Reset,
        }
    }
}

impl DisplayText for Label {
    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_hint(&mut self, hint: &str) {
        if self.hint != hint {
            self.hint = hint.to_string();
        }
    }
}
