use super::*;

fn stores() -> CredentialStores<MemoryStore, MemoryStore> {
    CredentialStores {
        durable: MemoryStore::default(),
        session: MemoryStore::default(),
    }
}

// =============================================================
// Persist selection
// =============================================================

#[test]
fn remember_me_writes_durable_only() {
    let stores = stores();
    stores.persist("tok1", true);
    assert_eq!(stores.durable.value().as_deref(), Some("tok1"));
    assert!(stores.session.value().is_none());
}

#[test]
fn no_remember_writes_session_only() {
    let stores = stores();
    stores.persist("tok1", false);
    assert!(stores.durable.value().is_none());
    assert_eq!(stores.session.value().as_deref(), Some("tok1"));
}

#[test]
fn persist_clears_the_other_store() {
    let stores = stores();
    stores.persist("tok1", true);
    stores.persist("tok2", false);
    assert!(stores.durable.value().is_none());
    assert_eq!(stores.session.value().as_deref(), Some("tok2"));
}

// =============================================================
// Restore fallback order
// =============================================================

#[test]
fn restore_prefers_durable() {
    let stores = stores();
    stores.durable.write("durable");
    stores.session.write("scoped");
    assert_eq!(stores.restore().as_deref(), Some("durable"));
}

#[test]
fn restore_falls_back_to_session_store() {
    let stores = stores();
    stores.session.write("scoped");
    assert_eq!(stores.restore().as_deref(), Some("scoped"));
}

#[test]
fn restore_empty_both_is_none() {
    assert!(stores().restore().is_none());
}

#[test]
fn restore_treats_empty_string_as_absent() {
    let stores = stores();
    stores.durable.write("");
    stores.session.write("scoped");
    assert_eq!(stores.restore().as_deref(), Some("scoped"));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_both_stores() {
    let stores = stores();
    stores.durable.write("a");
    stores.session.write("b");
    stores.clear();
    assert!(stores.durable.value().is_none());
    assert!(stores.session.value().is_none());
}

#[test]
fn clear_on_empty_stores_is_harmless() {
    let stores = stores();
    stores.clear();
    assert!(stores.restore().is_none());
}

// =============================================================
// Login scenario: remember=false
// =============================================================

#[test]
fn login_without_remember_matches_expected_layout() {
    use crate::state::session::Session;

    let stores = stores();
    let mut session = Session::default();

    // Server returned { body: { token: "tok1" } } for a@b.com / x.
    stores.persist("tok1", false);
    session.login_succeeded("tok1".to_owned());

    assert_eq!(stores.session.value().as_deref(), Some("tok1"));
    assert!(stores.durable.value().is_none());
    assert_eq!(session.auth.token, "tok1");
    assert!(session.auth.is_authenticated());
}
