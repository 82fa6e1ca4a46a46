//! Entry configuration.
//!
//! An entry can be described in TOML:
//!
//! ```toml
//! placeholder = "Port"
//! validate_on_text_changed = true
//! allowed_characters = "0123456789"
//!
//! [palette]
//! placeholder_error = "#ff5555"
//!
//! [[rules]]
//! kind = "int_range"
//! min = 1
//! max = 65535
//! message = "Not a port number"
//! ```

use crate::entry::{CharSet, ColorSpec, DisplayText, EntryPalette, Label, ValidatableEntry};
use crate::error::{EntryError, EntryResult};
use crate::rules::{
    AlwaysPass, EmailRule, IntRange, MaxLength, MinLength, RegexRule, SharedRule, UrlOrIpRule,
    ValidationRule,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serializable description of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Placeholder text.
    #[serde(default)]
    pub placeholder: String,
    /// Validate on every edit once validated.
    #[serde(default)]
    pub validate_on_text_changed: bool,
    /// Validate when focus is lost.
    #[serde(default = "default_true")]
    pub validate_on_focus_lost: bool,
    /// Restrict input to these characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_characters: Option<CharSet>,
    /// Mask the displayed text.
    #[serde(default)]
    pub masked: bool,
    /// Colors.
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

fn default_true() -> bool {
    true
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            validate_on_text_changed: false,
            validate_on_focus_lost: default_true(),
            allowed_characters: None,
            masked: false,
            palette: PaletteConfig::default(),
            rules: Vec::new(),
        }
    }
}

impl EntryConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> EntryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file.
    pub fn load(path: &Path) -> EntryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `entry.toml` from the app's config directory, or build the
    /// fallback when there is none.
    pub fn load_default(app: &str, fallback: impl FnOnce() -> Self) -> EntryResult<Self> {
        if let Some(path) = Self::default_path(app) {
            if path.exists() {
                tracing::info!(path = %path.display(), "loading entry config");
                return Self::load(&path);
            }
        }
        Ok(fallback())
    }

    /// Default config path for an app.
    pub fn default_path(app: &str) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", app).map(|d| d.config_dir().join("entry.toml"))
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> EntryResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EntryError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build every rule, failing on the first bad one.
    pub fn build_rules(&self) -> EntryResult<Vec<SharedRule>> {
        self.rules.iter().map(RuleSpec::build).collect()
    }

    /// Configure an existing entry.
    ///
    /// Nothing is changed if any rule or color fails to build.
    pub fn apply<S: DisplayText>(&self, entry: &mut ValidatableEntry<S>) -> EntryResult<()> {
        let rules = self.build_rules()?;
        let palette = self.palette.to_palette()?;

        entry.set_rules(rules);
        entry.set_palette(palette);
        entry.set_placeholder(self.placeholder.clone());
        entry.set_validate_on_text_changed(self.validate_on_text_changed);
        entry.set_validate_on_focus_lost(self.validate_on_focus_lost);
        entry.set_allowed_characters(self.allowed_characters.clone());
        entry.set_masked(self.masked);
        Ok(())
    }

    /// Build a label-backed entry.
    pub fn build(&self) -> EntryResult<ValidatableEntry<Label>> {
        let mut entry = ValidatableEntry::new();
        self.apply(&mut entry)?;
        Ok(entry)
    }
}

/// Palette as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_normal")]
    pub placeholder_normal: ColorSpec,
    #[serde(default = "default_error")]
    pub placeholder_error: ColorSpec,
    #[serde(default = "default_error")]
    pub message: ColorSpec,
}

fn default_normal() -> ColorSpec {
    ColorSpec::named("gray")
}

fn default_error() -> ColorSpec {
    ColorSpec::named("red")
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            placeholder_normal: default_normal(),
            placeholder_error: default_error(),
            message: default_error(),
        }
    }
}

impl PaletteConfig {
    /// Resolve every color.
    pub fn to_palette(&self) -> EntryResult<EntryPalette> {
        let resolve = |spec: &ColorSpec| {
            spec.to_color()
                .ok_or_else(|| EntryError::Config(format!("unknown color: {:?}", spec)))
        };
        Ok(EntryPalette {
            placeholder_normal: resolve(&self.placeholder_normal)?,
            placeholder_error: resolve(&self.placeholder_error)?,
            message: resolve(&self.message)?,
        })
    }
}

/// A rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    AlwaysPass {
        #[serde(default)]
        message: Option<String>,
    },
    MinLength {
        min: usize,
        #[serde(default)]
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        #[serde(default)]
        message: Option<String>,
    },
    IntRange {
        #[serde(default = "int_min")]
        min: i32,
        #[serde(default = "int_max")]
        max: i32,
        #[serde(default)]
        message: Option<String>,
    },
    Regex {
        pattern: String,
        #[serde(default)]
        message: Option<String>,
    },
    Email {
        #[serde(default)]
        message: Option<String>,
    },
    UrlOrIp {
        #[serde(default)]
        message: Option<String>,
    },
}

fn int_min() -> i32 {
    i32::MIN
}

fn int_max() -> i32 {
    i32::MAX
}

impl RuleSpec {
    /// Build the rule.
    pub fn build(&self) -> EntryResult<SharedRule> {
        let rule = match self {
            Self::AlwaysPass { message } => {
                with_message(AlwaysPass::new(), message, |r, m| r.with_message(m)).into_shared()
            }
            Self::MinLength { min, message } => {
                with_message(MinLength::new(*min), message, |r, m| r.with_message(m)).into_shared()
            }
            Self::MaxLength { max, message } => {
                with_message(MaxLength::new(*max), message, |r, m| r.with_message(m)).into_shared()
            }
            Self::IntRange { min, max, message } => {
                with_message(IntRange::new(*min, *max)?, message, |r, m| r.with_message(m))
                    .into_shared()
            }
            Self::Regex { pattern, message } => {
                with_message(RegexRule::new(pattern)?, message, |r, m| r.with_message(m))
                    .into_shared()
            }
            Self::Email { message } => {
                with_message(EmailRule::new(), message, |r, m| r.with_message(m)).into_shared()
            }
            Self::UrlOrIp { message } => {
                with_message(UrlOrIpRule::new(), message, |r, m| r.with_message(m)).into_shared()
            }
        };
        Ok(rule)
    }
}

fn with_message<R>(rule: R, message: &Option<String>, set: impl FnOnce(R, String) -> R) -> R {
    match message {
        Some(message) => set(rule, message.clone()),
        None => rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ValidityState;
    use ratatui::style::Color;

    const PORT_ENTRY: &str = r##"
placeholder = "Port"
validate_on_text_changed = true
allowed_characters = "0123456789"

[palette]
placeholder_error = "#ff5555"
message = 9

[[rules]]
kind = "min_length"
min = 0
message = "Port is required"

[[rules]]
kind = "int_range"
min = 1
max = 65535
message = "Not a port number"
"##;

    #[test]
    fn test_parse_config() {
        let config = EntryConfig::from_toml_str(PORT_ENTRY).unwrap();

        assert_eq!(config.placeholder, "Port");
        assert!(config.validate_on_text_changed);
        assert!(config.validate_on_focus_lost);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(
            config.rules[1],
            RuleSpec::IntRange {
                min: 1,
                max: 65535,
                message: Some("Not a port number".into()),
            }
        );
    }

    #[test]
    fn test_build_entry_from_config() {
        let mut entry = EntryConfig::from_toml_str(PORT_ENTRY).unwrap().build().unwrap();

        assert_eq!(entry.placeholder(), "Port");
        assert_eq!(entry.palette().placeholder_error, Color::Rgb(0xff, 0x55, 0x55));
        assert_eq!(entry.palette().message, Color::Indexed(9));

        entry.on_focus_lost();
        assert_eq!(entry.state(), ValidityState::Invalid);
        assert_eq!(entry.error_message(), "Port is required");

        entry.set_text("70000");
        assert_eq!(entry.error_message(), "Not a port number");

        entry.set_text("8080");
        assert!(entry.is_valid());

        assert!(matches!(entry.set_text("80a"), crate::TextChange::Rejected('a')));
    }

    #[test]
    fn test_defaults() {
        let config = EntryConfig::from_toml_str("").unwrap();

        assert_eq!(config, EntryConfig::default());
        assert!(config.validate_on_focus_lost);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_default_messages_and_bounds() {
        let config = EntryConfig::from_toml_str(
            r#"
[[rules]]
kind = "int_range"

[[rules]]
kind = "email"
"#,
        )
        .unwrap();

        let rules = config.build_rules().unwrap();
        assert!(rules[0].validate("-2147483648"));
        assert_eq!(rules[1].error_message(), "Invalid e-mail address");
    }

    #[test]
    fn test_invalid_pattern() {
        let config = EntryConfig::from_toml_str(
            r#"
[[rules]]
kind = "regex"
pattern = "[unclosed"
"#,
        )
        .unwrap();

        assert!(matches!(config.build(), Err(EntryError::InvalidPattern { .. })));
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut entry = ValidatableEntry::new().with_placeholder("Before");
        let config = EntryConfig {
            placeholder: "After".into(),
            rules: vec![RuleSpec::IntRange { min: 5, max: 1, message: None }],
            ..Default::default()
        };

        assert!(matches!(config.apply(&mut entry), Err(EntryError::InvalidRange { .. })));
        assert_eq!(entry.placeholder(), "Before");
    }

    #[test]
    fn test_unknown_color() {
        let config = EntryConfig::from_toml_str(
            r#"
[palette]
message = "ultraviolet"
"#,
        )
        .unwrap();

        assert!(matches!(config.build(), Err(EntryError::Config(_))));
    }

    #[test]
    fn test_unknown_rule_kind() {
        let result = EntryConfig::from_toml_str(
            r#"
[[rules]]
kind = "palindrome"
"#,
        );
        assert!(matches!(result, Err(EntryError::Toml(_))));
    }

    #[test]
    fn test_load_default_falls_back_without_file() {
        let app = format!("validatable-entry-missing-{}", std::process::id());
        let config = EntryConfig::load_default(&app, || EntryConfig {
            placeholder: "Fallback".into(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.placeholder, "Fallback");
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("validatable-entry-{}", std::process::id()))
            .join("entry.toml");
        let config = EntryConfig::from_toml_str(PORT_ENTRY).unwrap();

        config.save(&path).unwrap();
        let loaded = EntryConfig::load(&path).unwrap();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded.rules, config.rules);
        assert_eq!(loaded.allowed_characters, config.allowed_characters);
    }
}
