//! Configuration for the URL checker.

use std::path::PathBuf;
use validatable_entry::{EntryConfig, EntryResult, RuleSpec};

pub const APP_NAME: &str = "url-checker";

/// Entry used when no `entry.toml` exists.
pub fn builtin_entry() -> EntryConfig {
    EntryConfig {
        placeholder: "URL".into(),
        validate_on_text_changed: true,
        rules: vec![RuleSpec::UrlOrIp {
            message: Some("Not a URL or IP address".into()),
        }],
        ..Default::default()
    }
}

/// Load the entry from the config directory, falling back to the built-in one.
pub fn load_entry() -> EntryResult<EntryConfig> {
    EntryConfig::load_default(APP_NAME, builtin_entry)
}

/// Where the log file goes.
pub fn log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|d| d.data_local_dir().join("url-checker.log"))
}
