//! ValidatableEntry - labeled text input with inline validation.
//!
//! # Example
//!
//! ```ignore
//! use validatable_entry::{MinLength, ValidatableEntry, ValidationRule};
//!
//! let mut entry = ValidatableEntry::new()
//!     .with_placeholder("Username")
//!     .with_rule(MinLength::new(2).into_shared())
//!     .with_validate_on_text_changed(true);
//!
//! entry.on_validity_changed(|valid| println!("valid: {valid}"));
//!
//! entry.set_text("a");     // not validated yet
//! entry.on_focus_lost();   // first pass: invalid
//! entry.set_text("abc");   // validated on every edit from now on
//! assert!(entry.is_valid());
//! ```

mod presentation;
mod state;
mod surface;

pub use presentation::{ColorSpec, EntryPalette, Presentation};
pub use state::{CharSet, ValidityState};
pub use surface::{DisplayText, Label};

use crate::observable::{Observable, SubscriptionId};
use crate::rules::SharedRule;

use tracing::{debug, trace};

/// Command run when an entry's validity changes.
///
/// Closures taking a `bool` implement this directly.
pub trait ValidityCommand {
    /// Whether the command accepts this transition.
    fn can_execute(&self, _is_valid: bool) -> bool {
        true
    }

    /// Run the command with the new validity.
    fn execute(&mut self, is_valid: bool);
}

impl<F: FnMut(bool)> ValidityCommand for F {
    fn execute(&mut self, is_valid: bool) {
        self(is_valid)
    }
}

/// Outcome of a text edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChange {
    /// The new text was stored
    Accepted,
    /// The new text equals the current text
    Unchanged,
    /// The edit introduced a character outside the allowed set
    Rejected(char),
}

/// Text entry that validates itself against an ordered list of rules.
///
/// Validity has three states: never validated, valid and invalid. The first
/// validation pass happens on focus loss or an explicit
/// [`run_validations`](Self::run_validations); only after that do edits
/// trigger validation when `validate_on_text_changed` is set.
pub struct ValidatableEntry<S: DisplayText = Label> {
    text: Observable<String>,
    placeholder: Observable<String>,
    is_valid: Observable<bool>,
    is_never_validated: bool,
    error_message: String,
    rules: Vec<SharedRule>,
    validate_on_text_changed: bool,
    validate_on_focus_lost: bool,
    allowed_characters: Option<CharSet>,
    masked: bool,
    palette: EntryPalette,
    command: Option<Box<dyn ValidityCommand>>,
    entry: S,
    floating: S,
    message: S,
}

impl<S: DisplayText + std::fmt::Debug> std::fmt::Debug for ValidatableEntry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatableEntry")
            .field("text", self.text.get())
            .field("placeholder", self.placeholder.get())
            .field("state", &self.state())
            .field("error_message", &self.error_message)
            .field("rules", &self.rules)
            .field("validate_on_text_changed", &self.validate_on_text_changed)
            .field("validate_on_focus_lost", &self.validate_on_focus_lost)
            .field("allowed_characters", &self.allowed_characters)
            .field("masked", &self.masked)
            .field("entry", &self.entry)
            .field("floating", &self.floating)
            .field("message", &self.message)
            .finish()
    }
}

impl ValidatableEntry<Label> {
    /// Create an entry backed by in-memory labels.
    pub fn new() -> Self {
        Self::with_slots(Label::default(), Label::default(), Label::default())
    }
}

impl Default for ValidatableEntry<Label> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DisplayText> ValidatableEntry<S> {
    /// Create an entry writing into host-provided display slots.
    pub fn with_slots(entry: S, floating: S, message: S) -> Self {
        let mut this = Self {
            text: Observable::default(),
            placeholder: Observable::default(),
            is_valid: Observable::new(true),
            is_never_validated: true,
            error_message: String::new(),
            rules: Vec::new(),
            validate_on_text_changed: false,
            validate_on_focus_lost: true,
            allowed_characters: None,
            masked: false,
            palette: EntryPalette::default(),
            command: None,
            entry,
            floating,
            message,
        };
        this.refresh_presentation();
        this
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.set_placeholder(placeholder);
        self
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: SharedRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replace all rules.
    pub fn with_rules(mut self, rules: Vec<SharedRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Validate on every edit once the entry has been validated.
    pub fn with_validate_on_text_changed(mut self, enabled: bool) -> Self {
        self.validate_on_text_changed = enabled;
        self
    }

    /// Validate when the entry loses focus.
    pub fn with_validate_on_focus_lost(mut self, enabled: bool) -> Self {
        self.validate_on_focus_lost = enabled;
        self
    }

    /// Restrict input to a set of characters.
    pub fn with_allowed_characters(mut self, allowed: CharSet) -> Self {
        self.allowed_characters = Some(allowed);
        self
    }

    /// Mask the text when displayed.
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Set the colors.
    pub fn with_palette(mut self, palette: EntryPalette) -> Self {
        self.set_palette(palette);
        self
    }

    /// Attach the validity command.
    pub fn with_validity_command(mut self, command: impl ValidityCommand + 'static) -> Self {
        self.set_validity_command(command);
        self
    }

    // ----- accessors -----

    /// Current text.
    pub fn text(&self) -> &str {
        self.text.get()
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        self.placeholder.get()
    }

    /// Whether the last validation pass succeeded.
    ///
    /// Also true before any pass has run; see [`state`](Self::state).
    pub fn is_valid(&self) -> bool {
        *self.is_valid.get()
    }

    /// Whether no validation pass has run yet.
    pub fn is_never_validated(&self) -> bool {
        self.is_never_validated
    }

    /// Validity as a three-way state.
    pub fn state(&self) -> ValidityState {
        ValidityState::from_flags(self.is_valid(), self.is_never_validated)
    }

    /// Message of the failing rule, empty unless invalid.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[SharedRule] {
        &self.rules
    }

    pub fn validate_on_text_changed(&self) -> bool {
        self.validate_on_text_changed
    }

    pub fn validate_on_focus_lost(&self) -> bool {
        self.validate_on_focus_lost
    }

    pub fn allowed_characters(&self) -> Option<&CharSet> {
        self.allowed_characters.as_ref()
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn palette(&self) -> &EntryPalette {
        &self.palette
    }

    /// Input slot.
    pub fn entry_slot(&self) -> &S {
        &self.entry
    }

    /// Floating placeholder slot.
    pub fn floating_slot(&self) -> &S {
        &self.floating
    }

    /// Validation message slot.
    pub fn message_slot(&self) -> &S {
        &self.message
    }

    /// Presentation for the current values.
    pub fn presentation(&self) -> Presentation {
        Presentation::derive(
            self.state(),
            self.text.get(),
            self.placeholder.get(),
            &self.error_message,
            &self.palette,
        )
    }

    // ----- inbound -----

    /// Set the text, as a binding or the host program would.
    ///
    /// Goes through the same hook as a user edit.
    pub fn set_text(&mut self, text: impl Into<String>) -> TextChange {
        self.on_text_changed(text)
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        if self.placeholder.set(placeholder.into()) {
            self.refresh_presentation();
        }
    }

    /// Replace all rules. Takes effect on the next validation pass.
    pub fn set_rules(&mut self, rules: Vec<SharedRule>) {
        self.rules = rules;
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: SharedRule) {
        self.rules.push(rule);
    }

    /// Remove all rules.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    pub fn set_validate_on_text_changed(&mut self, enabled: bool) {
        self.validate_on_text_changed = enabled;
    }

    pub fn set_validate_on_focus_lost(&mut self, enabled: bool) {
        self.validate_on_focus_lost = enabled;
    }

    pub fn set_allowed_characters(&mut self, allowed: Option<CharSet>) {
        self.allowed_characters = allowed;
    }

    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    pub fn set_palette(&mut self, palette: EntryPalette) {
        self.palette = palette;
        self.refresh_presentation();
    }

    /// Attach the validity command, replacing any previous one.
    pub fn set_validity_command(&mut self, command: impl ValidityCommand + 'static) {
        self.command = Some(Box::new(command));
    }

    /// Detach the validity command.
    pub fn clear_validity_command(&mut self) {
        self.command = None;
    }

    // ----- subscriptions -----

    /// Subscribe to text changes.
    pub fn subscribe_text(&mut self, f: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.text.subscribe(f)
    }

    pub fn unsubscribe_text(&mut self, id: SubscriptionId) -> bool {
        self.text.unsubscribe(id)
    }

    /// Subscribe to placeholder changes.
    pub fn subscribe_placeholder(&mut self, f: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.placeholder.subscribe(f)
    }

    pub fn unsubscribe_placeholder(&mut self, id: SubscriptionId) -> bool {
        self.placeholder.unsubscribe(id)
    }

    /// Subscribe to validity transitions.
    pub fn on_validity_changed(&mut self, mut f: impl FnMut(bool) + 'static) -> SubscriptionId {
        self.is_valid.subscribe(move |valid| f(*valid))
    }

    pub fn unsubscribe_validity(&mut self, id: SubscriptionId) -> bool {
        self.is_valid.unsubscribe(id)
    }

    // ----- state machine -----

    /// Set the validity flag.
    ///
    /// The presentation is refreshed on every call. Subscribers and the
    /// validity command only run when the flag actually changes, after the
    /// presentation has been refreshed.
    pub fn set_is_valid(&mut self, valid: bool) {
        let changed = self.is_valid.update(valid);
        self.refresh_presentation();
        if !changed {
            return;
        }

        debug!(valid, text = %self.text.get(), "validity changed");
        self.is_valid.notify();
        if let Some(command) = self.command.as_mut() {
            if command.can_execute(valid) {
                command.execute(valid);
            }
        }
    }

    /// Run every rule against the current text.
    ///
    /// Rules run in order and evaluation stops at the first failure, whose
    /// message becomes the error message. No rules means valid. Returns the
    /// resulting validity.
    pub fn run_validations(&mut self) -> bool {
        self.is_never_validated = false;

        let text = self.text.get();
        let failed = self.rules.iter().find(|rule| {
            let passed = rule.validate(text);
            trace!(?rule, passed, "rule evaluated");
            !passed
        });
        let (valid, message) = match failed {
            Some(rule) => (false, rule.error_message().to_string()),
            None => (true, String::new()),
        };

        self.error_message = message;
        self.set_is_valid(valid);
        valid
    }

    /// Text-changed hook.
    ///
    /// Rejects edits that introduce disallowed characters, refreshes the
    /// floating placeholder, then validates if enabled and the entry has been
    /// validated before.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) -> TextChange {
        let new_text = new_text.into();

        if let Some(rejected) = self
            .allowed_characters
            .as_ref()
            .and_then(|allowed| allowed.first_introduced(self.text.get(), &new_text))
        {
            debug!(%rejected, "edit rejected");
            self.entry.set_text(self.text.get());
            return TextChange::Rejected(rejected);
        }

        if !self.text.set(new_text) {
            return TextChange::Unchanged;
        }
        self.refresh_presentation();

        if self.validate_on_text_changed && !self.is_never_validated {
            self.run_validations();
        }
        TextChange::Accepted
    }

    /// Focus-lost hook. Returns whether a validation pass ran.
    pub fn on_focus_lost(&mut self) -> bool {
        if !self.validate_on_focus_lost {
            return false;
        }
        self.run_validations();
        true
    }

    fn refresh_presentation(&mut self) {
        let p = self.presentation();

        self.entry.set_text(self.text.get());
        self.entry.set_hint(self.placeholder.get());

        self.floating.set_text(&p.floating_text);
        self.floating.set_visible(p.floating_visible);
        self.floating.set_color(p.floating_color);

        self.message.set_text(&p.message_text);
        self.message.set_visible(p.message_visible);
        self.message.set_color(p.message_color);
    }
}
