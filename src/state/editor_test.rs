use super::*;

fn profile() -> ProfileState {
    ProfileState {
        first_name: "Tony".to_owned(),
        last_name: "Stark".to_owned(),
    }
}

// =============================================================
// Viewing → Editing
// =============================================================

#[test]
fn default_is_viewing() {
    let editor = NameEditor::default();
    assert!(!editor.editing);
    assert!(!editor.saving);
    assert!(editor.error.is_none());
}

#[test]
fn start_seeds_inputs_from_profile() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    assert!(editor.editing);
    assert_eq!(editor.first_name, "Tony");
    assert_eq!(editor.last_name, "Stark");
    assert!(editor.error.is_none());
}

#[test]
fn start_clears_stale_error() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    editor.save_failed("boom".to_owned());
    editor.cancel();
    editor.start(&profile());
    assert!(editor.error.is_none());
}

// =============================================================
// Editing → Viewing (cancel)
// =============================================================

#[test]
fn cancel_discards_edits() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    editor.first_name = "Pepper".to_owned();
    editor.cancel();
    assert_eq!(editor, NameEditor::default());
}

// =============================================================
// Submit validation
// =============================================================

#[test]
fn submit_trims_names() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    editor.first_name = "  Pepper ".to_owned();
    editor.last_name = " Potts  ".to_owned();
    let sent = editor.submit();
    assert_eq!(sent, Some(("Pepper".to_owned(), "Potts".to_owned())));
    assert!(editor.saving);
    assert!(editor.error.is_none());
}

#[test]
fn submit_blank_first_name_is_rejected_locally() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    editor.first_name = "  ".to_owned();
    assert_eq!(editor.submit(), None);
    assert_eq!(editor.error.as_deref(), Some(NAMES_REQUIRED));
    assert!(!editor.saving);
    assert!(editor.editing);
}

#[test]
fn submit_blank_last_name_is_rejected_locally() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    editor.last_name = String::new();
    assert_eq!(editor.submit(), None);
    assert_eq!(editor.error.as_deref(), Some(NAMES_REQUIRED));
}

// =============================================================
// Save outcomes
// =============================================================

#[test]
fn save_succeeded_returns_to_viewing() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    let _ = editor.submit();
    editor.save_succeeded();
    assert_eq!(editor, NameEditor::default());
}

#[test]
fn save_failed_stays_in_edit_mode_with_fields_retained() {
    let mut editor = NameEditor::default();
    editor.start(&profile());
    editor.first_name = "Pepper".to_owned();
    let _ = editor.submit();
    editor.save_failed("Unable to update profile".to_owned());
    assert!(editor.editing);
    assert!(!editor.saving);
    assert_eq!(editor.first_name, "Pepper");
    assert_eq!(editor.error.as_deref(), Some("Unable to update profile"));
}
