//! Validity state and input filtering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where an entry stands with respect to its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityState {
    /// No validation pass has run yet
    #[default]
    NeverValidated,
    /// Last pass found no failing rule
    Valid,
    /// Last pass stopped on a failing rule
    Invalid,
}

impl ValidityState {
    /// Fold the two validity flags into a state.
    pub fn from_flags(is_valid: bool, is_never_validated: bool) -> Self {
        match (is_never_validated, is_valid) {
            (true, _) => Self::NeverValidated,
            (false, true) => Self::Valid,
            (false, false) => Self::Invalid,
        }
    }

    /// Whether the entry should look like an error.
    pub fn shows_error(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Characters an entry accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    /// Create a set from characters.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// ASCII digits.
    pub fn digits() -> Self {
        Self::new('0'..='9')
    }

    /// ASCII hex digits, both cases.
    pub fn hex_digits() -> Self {
        Self::new(('0'..='9').chain('a'..='f').chain('A'..='F'))
    }

    /// Add more characters.
    pub fn with(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.chars.extend(chars);
        self
    }

    /// Check a single character.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// First character of `text` outside the set.
    pub fn first_disallowed(&self, text: &str) -> Option<char> {
        text.chars().find(|c| !self.contains(*c))
    }

    /// First character outside the set that `new` holds more of than `old`.
    ///
    /// Text that already contained disallowed characters can still be edited
    /// as long as the edit adds none.
    pub fn first_introduced(&self, old: &str, new: &str) -> Option<char> {
        new.chars()
            .filter(|c| !self.contains(*c))
            .find(|c| {
                let count = |text: &str| text.chars().filter(|o| o == c).count();
                count(new) > count(old)
            })
    }

    /// Whether every character of `text` is in the set.
    pub fn permits(&self, text: &str) -> bool {
        self.first_disallowed(text).is_none()
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for CharSet {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl From<String> for CharSet {
    fn from(s: String) -> Self {
        Self::new(s.chars())
    }
}

impl From<CharSet> for String {
    fn from(set: CharSet) -> Self {
        set.chars.into_iter().collect()
    }
}
