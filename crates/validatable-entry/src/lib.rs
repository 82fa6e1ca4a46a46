//! # validatable-entry
//!
//! Labeled text entry with inline validation feedback for the TUI Suite.
//!
//! ## Components
//!
//! - [`ValidatableEntry`] - text input that validates itself against ordered rules
//! - [`ValidationRule`] - pure predicates over text: [`MinLength`], [`MaxLength`],
//!   [`IntRange`], [`RegexRule`], [`EmailRule`], [`UrlOrIpRule`], [`AlwaysPass`]
//! - [`Observable`] - value with change subscriptions, used for every bound property
//! - [`EntryView`] - Ratatui rendering of an entry's three display slots
//! - [`EntryConfig`] - TOML description of an entry
//!
//! ## Validity
//!
//! An entry is never validated until it first loses focus or
//! [`ValidatableEntry::run_validations`] is called. From then on it is either
//! valid or invalid, and the first failing rule supplies the error message.
//! Validity subscribers only hear about real transitions.

mod config;
mod entry;
mod error;
mod observable;
mod rules;
mod widget;

pub use config::{EntryConfig, PaletteConfig, RuleSpec};
pub use entry::{
    CharSet, ColorSpec, DisplayText, EntryPalette, Label, Presentation, TextChange,
    ValidatableEntry, ValidityCommand, ValidityState,
};
pub use error::{EntryError, EntryResult};
pub use observable::{Observable, SubscriptionId};
pub use rules::{
    AlwaysPass, EmailRule, IntRange, MaxLength, MinLength, RegexRule, SharedRule, UrlOrIpRule,
    ValidationRule,
};
pub use widget::{EntryView, ENTRY_HEIGHT};
