//! Presentation derived from validity.
//!
//! Nothing here is stored on the entry. Every field of [`Presentation`] is
//! recomputed from the current text, placeholder, message and validity flags.

use super::ValidityState;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color as written in configuration.
///
/// Accepts `"#rrggbb"`, ANSI names like `"red"` or `"darkgray"`, an
/// `{ r, g, b }` table or a 256-color index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex string or ANSI name
    Name(String),
    /// RGB values
    Rgb { r: u8, g: u8, b: u8 },
    /// 256-color index
    Index(u8),
}

impl ColorSpec {
    /// Create a named or hex color.
    pub fn named(s: impl Into<String>) -> Self {
        Self::Name(s.into())
    }

    /// Convert to a Ratatui color.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            Self::Name(s) if s.starts_with('#') => {
                let s = &s[1..];
                if s.len() != 6 || !s.is_ascii() {
                    return None;
                }
                let r = u8::from_str_radix(&s[0..2], 16).ok()?;
                let g = u8::from_str_radix(&s[2..4], 16).ok()?;
                let b = u8::from_str_radix(&s[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            Self::Name(name) => match name.to_lowercase().as_str() {
                "reset" | "default" => Some(Color::Reset),
                "black" => Some(Color::Black),
                "red" => Some(Color::Red),
                "green" => Some(Color::Green),
                "yellow" => Some(Color::Yellow),
                "blue" => Some(Color::Blue),
                "magenta" => Some(Color::Magenta),
                "cyan" => Some(Color::Cyan),
                "white" => Some(Color::White),
                "gray" | "grey" => Some(Color::Gray),
                "darkgray" | "darkgrey" => Some(Color::DarkGray),
                "lightred" => Some(Color::LightRed),
                "lightgreen" => Some(Color::LightGreen),
                "lightyellow" => Some(Color::LightYellow),
                "lightblue" => Some(Color::LightBlue),
                "lightmagenta" => Some(Color::LightMagenta),
                "lightcyan" => Some(Color::LightCyan),
                _ => None,
            },
            Self::Rgb { r, g, b } => Some(Color::Rgb(*r, *g, *b)),
            Self::Index(i) => Some(Color::Indexed(*i)),
        }
    }
}

/// Colors an entry switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPalette {
    /// Floating placeholder while valid or never validated
    pub placeholder_normal: Color,
    /// Floating placeholder while invalid
    pub placeholder_error: Color,
    /// Validation message
    pub message: Color,
}

impl Default for EntryPalette {
    fn default() -> Self {
        Self {
            placeholder_normal: Color::Gray,
            placeholder_error: Color::Red,
            message: Color::Red,
        }
    }
}

impl EntryPalette {
    /// Floating placeholder color for a validity state.
    pub fn placeholder_color(&self, state: ValidityState) -> Color {
        if state.shows_error() {
            self.placeholder_error
        } else {
            self.placeholder_normal
        }
    }
}

/// What the three display slots should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Floating placeholder text
    pub floating_text: String,
    /// Whether the floating placeholder is shown
    pub floating_visible: bool,
    /// Floating placeholder color
    pub floating_color: Color,
    /// Validation message text
    pub message_text: String,
    /// Whether the validation message is shown
    pub message_visible: bool,
    /// Validation message color
    pub message_color: Color,
}

impl Presentation {
    /// Derive the presentation for the given entry values.
    pub fn derive(
        state: ValidityState,
        text: &str,
        placeholder: &str,
        error_message: &str,
        palette: &EntryPalette,
    ) -> Self {
        let floating_visible = !text.is_empty();
        let message_visible = state.shows_error() && !error_message.is_empty();

        Self {
            floating_text: if floating_visible {
                placeholder.to_string()
            } else {
                String::new()
            },
            floating_visible,
            floating_color: palette.placeholder_color(state),
            message_text: if message_visible {
                error_message.to_string()
            } else {
                String::new()
            },
            message_visible,
            message_color: palette.message,
        }
    }
}
