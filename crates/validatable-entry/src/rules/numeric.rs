//! Integer range rule.

use super::ValidationRule;
use crate::error::{EntryError, EntryResult};

/// Text must parse as a 32-bit integer within `min..=max`.
///
/// Text that does not parse fails the same way as an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntRange {
    min: i32,
    max: i32,
    message: String,
}

impl IntRange {
    /// Create a range rule. Fails when `min > max`.
    pub fn new(min: i32, max: i32) -> EntryResult<Self> {
        if min > max {
            return Err(EntryError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            message: format!("Must be a whole number between {} and {}", min, max),
        })
    }

    /// Any 32-bit integer.
    pub fn integer() -> Self {
        Self {
            min: i32::MIN,
            max: i32::MAX,
            message: "Must be a whole number".into(),
        }
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Inclusive bounds.
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }
}

impl ValidationRule for IntRange {
    fn validate(&self, text: &str) -> bool {
        match text.trim().parse::<i32>() {
            Ok(value) => (self.min..=self.max).contains(&value),
            Err(_) => false,
        }
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}
