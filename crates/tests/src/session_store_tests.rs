use pretty_assertions::assert_eq;
use shared_types::{
    Decision, MemorySessionStore, RoleClass, RoleGate, SessionStore, DEFAULT_SESSION_KEY,
};

use crate::common::*;

#[test]
fn gate_reads_the_user_key() {
    let store = MemorySessionStore::new()
        .with_entry(DEFAULT_SESSION_KEY, session_with_role("name", "Admin"))
        .with_entry("token", "abc");
    assert_eq!(
        RoleGate::default().evaluate_store(&store, DEFAULT_SESSION_KEY, "/"),
        redirect("/admin")
    );
}

#[test]
fn empty_store_allows() {
    let store = MemorySessionStore::new();
    assert_eq!(
        RoleGate::default().evaluate_store(&store, DEFAULT_SESSION_KEY, "/register"),
        Decision::Allow
    );
}

#[test]
fn evaluation_leaves_store_untouched() {
    let store = MemorySessionStore::new()
        .with_entry(DEFAULT_SESSION_KEY, "{broken");
    let before = store.clone();
    let gate = RoleGate::default();
    for _ in 0..3 {
        assert_eq!(gate.evaluate_store(&store, DEFAULT_SESSION_KEY, "/"), Decision::Allow);
    }
    assert_eq!(store, before);
    assert_eq!(store.get(DEFAULT_SESSION_KEY).as_deref(), Some("{broken"));
}

#[test]
fn role_class_from_store_value() {
    let store = MemorySessionStore::new()
        .with_entry(DEFAULT_SESSION_KEY, session_with_role("roleName", "Senior Doctor"));
    let raw = store.get(DEFAULT_SESSION_KEY);
    assert_eq!(RoleClass::from_session(raw.as_deref()), RoleClass::Doctor);
    assert_eq!(RoleClass::from_session(None), RoleClass::Anonymous);
}
