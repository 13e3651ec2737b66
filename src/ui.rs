use std::collections::HashMap;

/// Inline error slots on the page. `Form` is the shared line above the submit
/// control; the rest sit under their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ClubName,
    Owner,
    Captain,
    Logo,
    Form,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Everything the page shows. The controller is the only writer, so tests can
/// drive events and assert on this directly without a rendering environment.
#[derive(Debug, Default)]
pub struct UiState {
    pub form_enabled: bool,
    pub add_player_enabled: bool,
    pub submit_busy: bool,
    pub players_counter: String,
    pub modal: Option<Modal>,
    /// Total times the modal has been opened, for asserting "exactly once".
    pub modal_open_count: usize,
    /// Blocking alerts, in the order they fired.
    pub alerts: Vec<String>,
    errors: HashMap<Field, String>,
}

impl UiState {
    pub fn show_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn hide_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn open_modal(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            message: message.into(),
        });
        self.modal_open_count += 1;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }
}
