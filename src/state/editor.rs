#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::state::profile::ProfileState;

/// Shown when either trimmed name is empty; no request is sent.
pub const NAMES_REQUIRED: &str = "First name and last name are required";

/// State machine for the profile page's name editor.
///
/// Transitions: `Viewing → start → Editing`, `Editing → cancel → Viewing`,
/// `Editing → submit/save_succeeded → Viewing`, `Editing → save_failed →
/// Editing` (error shown, fields retained). Trim-validation happens in
/// `submit` so a blank name never reaches the network layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameEditor {
    pub editing: bool,
    pub first_name: String,
    pub last_name: String,
    pub error: Option<String>,
    pub saving: bool,
}

impl NameEditor {
    /// Enter edit mode, seeding the inputs from the current profile.
    pub fn start(&mut self, current: &ProfileState) {
        self.editing = true;
        self.first_name = current.first_name.clone();
        self.last_name = current.last_name.clone();
        self.error = None;
        self.saving = false;
    }

    /// Leave edit mode discarding any changes.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Validate the inputs and, when valid, enter the saving state.
    ///
    /// Returns the trimmed `(first, last)` pair to send, or `None` when a
    /// name is blank — in which case the validation error is set and the
    /// caller must not issue a request.
    pub fn submit(&mut self) -> Option<(String, String)> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            self.error = Some(NAMES_REQUIRED.to_owned());
            return None;
        }
        self.saving = true;
        self.error = None;
        Some((first.to_owned(), last.to_owned()))
    }

    /// The update round-tripped; back to viewing.
    pub fn save_succeeded(&mut self) {
        *self = Self::default();
    }

    /// The update failed; stay in edit mode with the inputs intact so the
    /// user can retry.
    pub fn save_failed(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }
}
