use pretty_assertions::assert_eq;
use shared_types::{Decision, GateConfig, RoleGate};

use crate::common::*;

// ── Reference scenarios ─────────────────────────────────────────────

#[test]
fn absent_session_allows() {
    assert_eq!(evaluate(None), Decision::Allow);
}

#[test]
fn admin_name_redirects_to_admin() {
    assert_eq!(evaluate(Some(r#"{"role":{"name":"Admin"}}"#)), redirect("/admin"));
}

#[test]
fn doctor_role_name_redirects_to_doctor() {
    assert_eq!(
        evaluate(Some(r#"{"role":{"roleName":"DOCTOR"}}"#)),
        redirect("/doctor")
    );
}

#[test]
fn patient_allows() {
    assert_eq!(evaluate(Some(r#"{"role":{"name":"patient"}}"#)), Decision::Allow);
}

#[test]
fn corrupt_json_allows() {
    assert_eq!(evaluate(Some("not valid json{")), Decision::Allow);
}

// ── Edge cases ──────────────────────────────────────────────────────

#[test]
fn admin_takes_priority_over_doctor() {
    assert_eq!(
        evaluate(Some(r#"{"role":{"name":"superadmin-doctor"}}"#)),
        redirect("/admin")
    );
    assert_eq!(
        evaluate(Some(r#"{"role":{"name":"doctor","roleName":"admin"}}"#)),
        redirect("/doctor")
    );
}

#[test]
fn empty_name_uses_role_name() {
    assert_eq!(
        evaluate(Some(r#"{"role":{"name":"","roleName":"Administrator"}}"#)),
        redirect("/admin")
    );
}

#[test]
fn non_string_name_is_not_skipped_for_role_name() {
    for raw in [
        r#"{"role":{"name":42,"roleName":"doctor"}}"#,
        r#"{"role":{"name":true,"roleName":"Admin"}}"#,
        r#"{"role":{"name":{"label":"admin"},"roleName":"admin"}}"#,
        r#"{"role":{"name":["doctor"],"roleName":"doctor"}}"#,
        r#"{"role":{"name":0,"roleName":"ADMIN"}}"#,
    ] {
        assert_eq!(evaluate(Some(raw)), Decision::Allow, "input: {raw}");
    }
}

#[test]
fn null_name_uses_role_name() {
    assert_eq!(
        evaluate(Some(r#"{"role":{"name":null,"roleName":"doctor"}}"#)),
        redirect("/doctor")
    );
}

#[test]
fn unusual_role_shapes_allow() {
    for raw in [
        "{}",
        r#"{"role":null}"#,
        r#"{"role":{}}"#,
        r#"{"role":{"name":null}}"#,
        r#"{"role":{"name":7}}"#,
        r#"{"role":{"name":""}}"#,
        r#"{"role":"admin"}"#,
        r#"{"role":["doctor"]}"#,
        "null",
        "[]",
        "",
    ] {
        assert_eq!(evaluate(Some(raw)), Decision::Allow, "input: {raw:?}");
    }
}

#[test]
fn unrelated_fields_do_not_matter() {
    let raw = r#"{"id":"u-1","email":"admin@clinic.test","name":"Doctor Who","role":{"name":"nurse"}}"#;
    assert_eq!(evaluate(Some(raw)), Decision::Allow);
}

#[test]
fn substring_match_is_preserved() {
    // Loose containment: any label mentioning a privileged role matches.
    assert_eq!(
        evaluate(Some(r#"{"role":{"name":"not-an-admin"}}"#)),
        redirect("/admin")
    );
    assert_eq!(
        evaluate(Some(r#"{"role":{"roleName":"Doctoral Student"}}"#)),
        redirect("/doctor")
    );
}

#[test]
fn requested_path_does_not_change_outcome() {
    let gate = RoleGate::default();
    let raw = Some(r#"{"role":{"name":"doctor"}}"#);
    for path in ["/", "/login", "/register", "/services", "/doctor"] {
        assert_eq!(gate.evaluate(raw, path), redirect("/doctor"), "path: {path}");
    }
}

#[test]
fn custom_landings_are_used() {
    let gate = RoleGate::new(&GateConfig {
        admin_landing: "/staff/admin".to_string(),
        ..GateConfig::default()
    });
    assert_eq!(
        gate.evaluate(Some(r#"{"role":{"name":"ADMIN"}}"#), "/"),
        redirect("/staff/admin")
    );
    assert_eq!(
        gate.evaluate(Some(r#"{"role":{"name":"doctor"}}"#), "/"),
        redirect("/doctor")
    );
}
