//! Entry error types.

use thiserror::Error;

/// Errors raised while configuring an entry.
///
/// Failing validation is never an error; these are setup faults that should
/// surface before the entry is shown.
#[derive(Debug, Error)]
pub enum EntryError {
    /// A regex rule was given a pattern that does not compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An integer range rule with its bounds swapped.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML error.
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for EntryError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e.to_string())
    }
}

/// Result type for entry operations.
pub type EntryResult<T> = Result<T, EntryError>;
