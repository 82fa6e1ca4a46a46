//! Validation rules for entry text.
//!
//! A rule is a pure predicate over the entry's text plus the message shown
//! when it fails. Rules hold no reference to the entry that runs them and are
//! shared between entries behind an [`Arc`].
//!
//! # Example
//!
//! ```ignore
//! use validatable_entry::{IntRange, MinLength, ValidationRule};
//!
//! let name = MinLength::new(2).with_message("Name is too short");
//! assert!(!name.validate("ab"));
//! assert!(name.validate("abc"));
//!
//! let age = IntRange::new(0, 130)?;
//! assert!(!age.validate("old"));
//! ```

mod length;
mod numeric;
mod pattern;

pub use length::{MaxLength, MinLength};
pub use numeric::IntRange;
pub use pattern::{EmailRule, RegexRule, UrlOrIpRule};

use std::fmt;
use std::sync::Arc;

/// A rule shared between entries.
pub type SharedRule = Arc<dyn ValidationRule>;

/// Capability every validation rule provides.
///
/// `validate` must be total: empty or whitespace text is ordinary input and
/// only ever makes the rule pass or fail.
pub trait ValidationRule: Send + Sync + fmt::Debug {
    /// Check the text against this rule.
    fn validate(&self, text: &str) -> bool;

    /// Message shown while this rule is the first one failing.
    fn error_message(&self) -> &str;

    /// Wrap the rule for sharing between entries.
    fn into_shared(self) -> SharedRule
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// Empty or whitespace-only text.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Rule that accepts any text.
///
/// Useful as a placeholder in configuration where a rule slot is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlwaysPass {
    message: String,
}

impl AlwaysPass {
    /// Create a new always-pass rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl ValidationRule for AlwaysPass {
    fn validate(&self, _text: &str) -> bool {
        true
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_pass() {
        let rule = AlwaysPass::new();
        assert!(rule.validate(""));
        assert!(rule.validate("   "));
        assert!(rule.validate("anything at all"));
        assert_eq!(rule.error_message(), "");
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_shared_rule_is_reusable() {
        let rule: SharedRule = MinLength::new(1).into_shared();
        let other = Arc::clone(&rule);

        assert!(rule.validate("ab"));
        assert!(!other.validate("a"));
        assert_eq!(Arc::strong_count(&rule), 2);
    }
}
