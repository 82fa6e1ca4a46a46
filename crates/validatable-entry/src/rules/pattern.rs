//! Pattern based rules.

use super::ValidationRule;
use crate::error::{EntryError, EntryResult};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"(\w+)(\.|_)?(\w*)@(\w+)(\.(\w+))+";

const URL_PATTERN: &str =
    r"^(https?://)?(www\.)?[a-zA-Z0-9@:%._+~#=-]{1,256}\.[a-z]{2,6}\b[-a-zA-Z0-9@:%_+.~#?&/=]*$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("e-mail pattern compiles"));

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("url pattern compiles"));

/// Text must match a regular expression.
///
/// The pattern is compiled when the rule is built, so a rule without a usable
/// pattern cannot exist.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    message: String,
}

impl RegexRule {
    /// Compile `pattern` into a rule.
    pub fn new(pattern: &str) -> EntryResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| EntryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(regex))
    }

    /// Build a rule from an already compiled regex.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            message: "Invalid format".into(),
        }
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl ValidationRule for RegexRule {
    fn validate(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// E-mail address rule.
#[derive(Debug, Clone)]
pub struct EmailRule {
    inner: RegexRule,
}

impl EmailRule {
    /// Create an e-mail rule.
    pub fn new() -> Self {
        Self {
            inner: RegexRule::from_regex(EMAIL_REGEX.clone())
                .with_message("Invalid e-mail address"),
        }
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.inner = self.inner.with_message(message);
        self
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for EmailRule {
    fn validate(&self, text: &str) -> bool {
        self.inner.validate(text)
    }

    fn error_message(&self) -> &str {
        self.inner.error_message()
    }
}

/// Web address or dotted-quad IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOrIpRule {
    message: String,
}

impl UrlOrIpRule {
    /// Create a URL-or-IP rule.
    pub fn new() -> Self {
        Self {
            message: "Invalid URL or IP address".into(),
        }
    }

    /// Set the error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for UrlOrIpRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for UrlOrIpRule {
    fn validate(&self, text: &str) -> bool {
        URL_REGEX.is_match(text) || text.parse::<Ipv4Addr>().is_ok()
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}
