//! Length bound rules.
//!
//! Lengths are counted in characters. Both bounds are exclusive, and blank
//! text is a boundary case: it never satisfies a minimum and always satisfies
//! a maximum.

use super::{is_blank, ValidationRule};

/// Text must be longer than `min` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    /// Create a minimum length rule.
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Must be longer than {} characters", min),
        }
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The exclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }
}

impl ValidationRule for MinLength {
    fn validate(&self, text: &str) -> bool {
        if is_blank(text) {
            return false;
        }
        text.chars().count() > self.min
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Text must be shorter than `max` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLength {
    max: usize,
    message: String,
}

impl MaxLength {
    /// Create a maximum length rule.
    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: format!("Must be shorter than {} characters", max),
        }
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The exclusive upper bound.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl ValidationRule for MaxLength {
    fn validate(&self, text: &str) -> bool {
        if is_blank(text) {
            return true;
        }
        text.chars().count() < self.max
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}
