use super::*;

fn body(first: &str, last: &str) -> ProfileBody {
    ProfileBody {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
    }
}

// =============================================================
// ProfileState defaults
// =============================================================

#[test]
fn profile_state_default_is_empty() {
    let state = ProfileState::default();
    assert_eq!(state.first_name, "");
    assert_eq!(state.last_name, "");
}

// =============================================================
// Apply / clear transitions
// =============================================================

#[test]
fn apply_replaces_both_names() {
    let mut state = ProfileState::default();
    state.apply(body("Tony", "Stark"));
    assert_eq!(state.first_name, "Tony");
    assert_eq!(state.last_name, "Stark");
}

#[test]
fn apply_overwrites_previous_names() {
    let mut state = ProfileState::default();
    state.apply(body("Tony", "Stark"));
    state.apply(body("Pepper", "Potts"));
    assert_eq!(state.first_name, "Pepper");
    assert_eq!(state.last_name, "Potts");
}

#[test]
fn clear_resets_to_default() {
    let mut state = ProfileState::default();
    state.apply(body("Tony", "Stark"));
    state.clear();
    assert_eq!(state, ProfileState::default());
}
