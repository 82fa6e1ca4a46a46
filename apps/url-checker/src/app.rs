//! Application state for the URL checker.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;
use validatable_entry::{EntryConfig, ValidatableEntry};

/// Form state the entry is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    pub url: String,
    pub label_text: String,
    pub is_url_valid: bool,
}

impl Default for FormModel {
    fn default() -> Self {
        Self {
            url: String::new(),
            label_text: "Enter a URL".into(),
            is_url_valid: false,
        }
    }
}

impl FormModel {
    /// Validity command target.
    pub fn validity_changed(&mut self, is_valid: bool) {
        self.is_url_valid = is_valid;
        self.label_text = format!("The URL is {}", if is_valid { "valid" } else { "invalid" });
    }

    pub fn can_submit(&self) -> bool {
        self.is_url_valid
    }

    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.label_text = self.url.clone();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry,
    Button,
}

pub struct App {
    pub entry: ValidatableEntry,
    pub model: Rc<RefCell<FormModel>>,
    pub focus: Focus,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &EntryConfig) -> anyhow::Result<Self> {
        let model = Rc::new(RefCell::new(FormModel::default()));
        let mut entry = config.build()?;

        let bound = Rc::clone(&model);
        entry.subscribe_text(move |text| bound.borrow_mut().url = text.clone());

        let target = Rc::clone(&model);
        entry.set_validity_command(move |valid: bool| target.borrow_mut().validity_changed(valid));

        Ok(Self {
            entry,
            model,
            focus: Focus::Entry,
            should_quit: false,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report releases
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Enter => {
                if self.focus == Focus::Entry {
                    self.toggle_focus();
                }
                self.submit();
            }
            _ if self.focus == Focus::Entry => {
                self.entry.handle_key(key);
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Entry => {
                self.entry.on_focus_lost();
                Focus::Button
            }
            Focus::Button => Focus::Entry,
        };
    }

    fn submit(&mut self) {
        let submitted = self.model.borrow_mut().submit();
        tracing::debug!(submitted, url = %self.entry.text(), "submit");
    }
}
